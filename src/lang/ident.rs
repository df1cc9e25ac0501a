// Variable names. The optional sigil is part of the name.

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
    Integer(String),
}

impl Ident {
    pub fn new(s: &str) -> Ident {
        match s.chars().last() {
            Some('$') => Ident::String(s.to_string()),
            Some('%') => Ident::Integer(s.to_string()),
            _ => Ident::Plain(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        use Ident::*;
        match self {
            Plain(s) | String(s) | Integer(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
