use anyhow::Context as _;
use clap::Args;
use serde::de::DeserializeOwned;
use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Every subcommand reads one JSON document and writes one back.
// This struct standardizes their implementation.
#[derive(Args)]
pub struct IOArgs {
    /// The price JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    /// Parse the input as a JSON document of type `T`.
    ///
    /// Errors name the input they came from, so a rejected price feed can be
    /// traced back to its file.
    pub fn read_json<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let reader = self.read()?;
        serde_json::from_reader(reader)
            .with_context(|| format!("{} is not a valid price document", self.input))
    }

    pub fn read(&self) -> anyhow::Result<Box<dyn Read>> {
        match &self.input {
            PathOrStd::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            PathOrStd::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            PathOrStd::Path(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            PathOrStd::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl fmt::Display for PathOrStd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Std => f.write_str("stdin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use price_core::models::PriceList;

    fn args_for(input: PathBuf) -> IOArgs {
        IOArgs {
            input: PathOrStd::Path(input),
            output: PathOrStd::Std,
        }
    }

    #[test]
    fn test_dash_means_std() {
        assert_eq!("-".parse::<PathOrStd>().unwrap(), PathOrStd::Std);
        assert_eq!(
            "prices.json".parse::<PathOrStd>().unwrap(),
            PathOrStd::Path(PathBuf::from("prices.json"))
        );
    }

    #[test]
    fn test_read_json_parses_price_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.json");
        std::fs::write(
            &path,
            r#"[{
                "product_code": "122856",
                "slot": 1,
                "department": 1,
                "begin": "2013-01-01T00:00:00Z",
                "end": "2013-01-31T23:59:59Z",
                "amount": 11000
            }]"#,
        )
        .unwrap();

        let prices: PriceList = args_for(path).read_json().unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].amount().minor_units(), 11_000);
    }

    #[test]
    fn test_read_json_names_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();

        let error = args_for(path).read_json::<PriceList>().unwrap_err();
        assert!(format!("{error}").contains("broken.json"));
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = args_for(dir.path().join("absent.json"))
            .read_json::<PriceList>()
            .unwrap_err();
        assert!(format!("{error}").contains("absent.json"));
    }
}
