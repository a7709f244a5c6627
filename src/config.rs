use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "transactions.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the report is saved.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Builds the config from process arguments, the first being the program name.
    /// Usage: `<program> [OUTPUT_PATH]`
    pub fn from_args<I>(args: I) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let args = args.into_iter().collect::<Vec<String>>();
        match args.as_slice() {
            [] | [_] => Ok(Config::default()),
            [_, output] => Ok(Config {
                output: PathBuf::from(output),
            }),
            [program, ..] => anyhow::bail!("Usage: {program} [OUTPUT_PATH]"),
        }
    }
}
