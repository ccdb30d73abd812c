//! K-mer windows and the tour-to-sequence codec
pub mod codec;
pub mod kmer;
