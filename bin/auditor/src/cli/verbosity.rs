#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn directive(&self) -> String {
        match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn,hyper_util=error",
            Verbosity::Info => "info,hyper_util=warn,reqwest=warn",
            Verbosity::Debug => "debug,hyper_util=info",
            Verbosity::Trace => "trace",
        }
        .to_string()
    }
}

pub fn verbosity_parser(s: &str) -> Result<Verbosity, String> {
    let level = s.parse::<u8>().map_err(|err| err.to_string())?;

    match level {
        1 => Ok(Verbosity::Error),
        2 => Ok(Verbosity::Warn),
        3 => Ok(Verbosity::Info),
        4 => Ok(Verbosity::Debug),
        5 => Ok(Verbosity::Trace),
        _ => Err(format!("verbosity must be between 1 and 5, got {level}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_parser() {
        assert_eq!(verbosity_parser("1"), Ok(Verbosity::Error));
        assert_eq!(verbosity_parser("3"), Ok(Verbosity::Info));
        assert_eq!(verbosity_parser("5"), Ok(Verbosity::Trace));
        assert!(verbosity_parser("0").is_err());
        assert!(verbosity_parser("loud").is_err());
    }
}
