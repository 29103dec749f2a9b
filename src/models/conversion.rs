#[derive(Clone, Debug)]
pub struct ConversionInput {
    pub url: String,
    pub no_progress: bool,
}

#[derive(Debug, PartialEq)]
pub struct ConversionOutput {
    pub url: String,
    pub bytes_written: usize,
}
