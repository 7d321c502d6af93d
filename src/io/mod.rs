// Purpose - external interfaces, file formats

pub mod wav;

pub use wav::{read_wav, write_wav, WavFormat};
