use super::CurrencyCode;

/// The target currencies of a rate lookup or conversion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Symbols {
    Single(CurrencyCode),
    Many(Vec<CurrencyCode>),
}

impl Symbols {
    /// Value of the `symbols` query parameter.
    pub fn to_param(&self) -> String {
        match self {
            Symbols::Single(code) => code.clone(),
            Symbols::Many(codes) => codes.join(","),
        }
    }
}

impl From<&str> for Symbols {
    fn from(code: &str) -> Self {
        Symbols::Single(code.to_string())
    }
}

impl From<String> for Symbols {
    fn from(code: String) -> Self {
        Symbols::Single(code)
    }
}

impl From<Vec<String>> for Symbols {
    fn from(codes: Vec<String>) -> Self {
        Symbols::Many(codes)
    }
}

impl From<Vec<&str>> for Symbols {
    fn from(codes: Vec<&str>) -> Self {
        Symbols::Many(codes.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Symbols {
    fn from(codes: &[&str]) -> Self {
        Symbols::Many(codes.iter().map(|code| code.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Symbols {
    fn from(codes: [&str; N]) -> Self {
        Symbols::Many(codes.iter().map(|code| code.to_string()).collect())
    }
}
