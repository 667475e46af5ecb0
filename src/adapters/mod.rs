pub mod batch_csv;
pub mod filesystem;
pub mod generation_client;
pub mod pdflatex;
