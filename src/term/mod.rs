use crate::lang::ast::{BasicLine, Body, Statement, StatementToken, TokenKind, Value};
use crate::lang::Error;
use crate::{parse_with, Config, Encoding};
use ansi_term::{Colour, Style};
use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Dump the syntax tree of a C64 BASIC program.
#[derive(Parser, Debug)]
#[command(name = "basic-dump", version)]
struct Args {
    /// BASIC source file
    file: PathBuf,

    /// Unit for column numbers: utf-8, utf-16 or utf-32
    #[arg(long, default_value_t = Encoding::Utf16)]
    encoding: Encoding,

    /// Only show the line with this label
    #[arg(long)]
    label: Option<u64>,

    /// Print the keyword at a 0-based editor coordinate
    #[arg(long, value_name = "LINE:CHARACTER", value_parser = parse_coordinate)]
    at: Option<(usize, usize)>,

    /// Print a canonical listing instead of the tree
    #[arg(long)]
    list: bool,

    /// Disable colors
    #[arg(long)]
    plain: bool,
}

fn parse_coordinate(s: &str) -> Result<(usize, usize), String> {
    let (line, character) = s
        .split_once(':')
        .ok_or_else(|| "expected LINE:CHARACTER".to_string())?;
    let line = line.trim().parse().map_err(|e| format!("line: {}", e))?;
    let character = character
        .trim()
        .parse()
        .map_err(|e| format!("character: {}", e))?;
    Ok((line, character))
}

pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let source = args.file.display().to_string();
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("failed to read source file {}: {}", source, e))?;
    let config = Config::default().with_encoding(args.encoding);
    let painter = Painter::new(!args.plain);
    let program = match parse_with(&source, &text, &config) {
        Ok(program) => program,
        Err(error) => return Err(painter.error(&source, &text, &error, args.encoding)),
    };
    if let Some((line, character)) = args.at {
        match program.find_token_at(line, character) {
            Some(keyword) => println!("{}", keyword),
            None => println!("no"),
        }
        return Ok(());
    }
    let lines: Vec<&BasicLine> = match args.label {
        Some(label) => match program.find_basic_line(label) {
            Some(line) => vec![line],
            None => return Err(format!("undefined line {}", label)),
        },
        None => program.lines().iter().collect(),
    };
    let mut out = String::new();
    for line in lines {
        let written = if args.list {
            writeln!(out, "{}", line)
        } else {
            painter.line(&mut out, line)
        };
        written.map_err(|e| e.to_string())?;
    }
    print!("{}", out);
    Ok(())
}

struct Painter {
    label: Style,
    keyword: Style,
    literal: Style,
    variable: Style,
    comment: Style,
    position: Style,
    error: Style,
}

impl Painter {
    fn new(color: bool) -> Painter {
        if !color {
            let plain = Style::new();
            return Painter {
                label: plain,
                keyword: plain,
                literal: plain,
                variable: plain,
                comment: plain,
                position: plain,
                error: plain,
            };
        }
        Painter {
            label: Style::new().bold(),
            keyword: Colour::Blue.bold(),
            literal: Colour::Green.normal(),
            variable: Colour::Yellow.normal(),
            comment: Colour::Fixed(244).italic(),
            position: Style::new().dimmed(),
            error: Style::new().bold(),
        }
    }

    fn line(&self, s: &mut String, line: &BasicLine) -> std::fmt::Result {
        writeln!(
            s,
            "{} {} {}",
            self.label.paint("BASIC line"),
            self.label.paint(line.label.to_string()),
            self.position.paint(format!("@{}", line.position)),
        )?;
        match &line.body {
            Body::Comment(c) => writeln!(s, "  comment '{}'", self.comment.paint(c.as_str())),
            Body::Statements(v) => {
                for statement in v {
                    self.statement(s, statement, 2)?;
                }
                Ok(())
            }
        }
    }

    fn statement(&self, s: &mut String, statement: &Statement, indent: usize) -> std::fmt::Result {
        writeln!(s, "{:w$}stmt", "", w = indent)?;
        for token in &statement.tokens {
            self.token(s, token, indent + 2)?;
        }
        Ok(())
    }

    fn token(&self, s: &mut String, token: &StatementToken, indent: usize) -> std::fmt::Result {
        write!(s, "{:w$}", "", w = indent)?;
        write!(s, "{} ", self.position.paint(format!("@{}", token.position.column)))?;
        match &token.kind {
            TokenKind::Keyword(k) => write!(s, "BASIC '{}'", self.keyword.paint(*k))?,
            TokenKind::Value(Value::Number(n)) => {
                write!(s, "number {}", self.literal.paint(n.to_string()))?
            }
            TokenKind::Value(Value::String(t)) => {
                write!(s, "string '{}'", self.literal.paint(t.as_str()))?
            }
            TokenKind::Value(Value::Variable(i)) => {
                write!(s, "var {}", self.variable.paint(i.as_str()))?
            }
            TokenKind::Value(Value::Subexpression(_)) => write!(s, "(")?,
        }
        if let Some(c) = token.trailing {
            write!(s, " {}", c)?;
        }
        writeln!(s)?;
        if let TokenKind::Value(Value::Subexpression(inner)) = &token.kind {
            self.statement(s, inner, indent + 2)?;
        }
        Ok(())
    }

    /// Error message followed by the offending source line with the
    /// error column underlined.
    fn error(&self, source: &str, text: &str, error: &Error, encoding: Encoding) -> String {
        let position = error.position();
        let mut out = format!("{}:{}", source, self.error.paint(error.to_string()));
        if let Some(line) = source_line(text, position.line) {
            out.push('\n');
            out.push_str(&decorate_column(line, position.column, encoding));
        }
        out
    }
}

/// 1-based physical line of `text`, split the way the lexer counts lines.
fn source_line(text: &str, line: usize) -> Option<&str> {
    text.split('\n')
        .flat_map(|l| l.strip_suffix('\r').unwrap_or(l).split('\r'))
        .nth(line.checked_sub(1)?)
}

fn decorate_column(line: &str, column: usize, encoding: Encoding) -> String {
    let style = Style::new().underline();
    let mut out = String::new();
    let mut at = 1;
    let mut underlined = false;
    for ch in line.chars() {
        if at == column {
            out.push_str(&style.prefix().to_string());
            underlined = true;
        }
        out.push(ch);
        if underlined {
            out.push_str(&style.suffix().to_string());
            underlined = false;
        }
        let mut buf = [0; 4];
        at += encoding.width(ch.encode_utf8(&mut buf));
    }
    if column >= at {
        out.push_str(&style.paint(" ").to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Position};

    #[test]
    fn test_dump() {
        let p = parse("test.bas", "10 REM HI\n20 PRINT \"A\";(X+1)").unwrap();
        let painter = Painter::new(false);
        let mut dump = String::new();
        for line in p.lines() {
            painter.line(&mut dump, line).unwrap();
        }
        assert_eq!(
            dump,
            "BASIC line 10 @1:1\n\
             \x20 comment 'REM HI'\n\
             BASIC line 20 @2:1\n\
             \x20 stmt\n\
             \x20   @4 BASIC 'PRINT'\n\
             \x20   @10 string 'A' ;\n\
             \x20   @14 (\n\
             \x20     stmt\n\
             \x20       @15 var X\n\
             \x20       @16 BASIC '+'\n\
             \x20       @17 number 1\n"
        );
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("9:35"), Ok((9, 35)));
        assert!(parse_coordinate("9").is_err());
        assert!(parse_coordinate("x:1").is_err());
    }

    #[test]
    fn test_source_line() {
        let text = "10 END\r20 X=\r\n30 END\n40 END";
        assert_eq!(source_line(text, 1), Some("10 END"));
        assert_eq!(source_line(text, 2), Some("20 X="));
        assert_eq!(source_line(text, 3), Some("30 END"));
        assert_eq!(source_line(text, 4), Some("40 END"));
        assert_eq!(source_line(text, 5), None);
        assert_eq!(source_line(text, 0), None);
    }

    #[test]
    fn test_error_shows_line_after_carriage_return() {
        let text = "10 END\r20 PRINT (";
        let e = parse("cr.bas", text).unwrap_err();
        assert_eq!(e.position(), Position::new(2, 11));
        let message = Painter::new(false).error("cr.bas", text, &e, Encoding::Utf16);
        let shown = message.lines().nth(1).unwrap();
        assert!(shown.starts_with("20 PRINT ("));
    }

    #[test]
    fn test_decorate_column() {
        let s = decorate_column("10 X", 4, Encoding::Utf16);
        assert!(s.starts_with("10 "));
        assert!(s.contains('X'));
        let past_end = decorate_column("10", 3, Encoding::Utf16);
        assert!(past_end.len() > 2);
    }
}
