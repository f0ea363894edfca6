use std::io::{self, BufRead, Write};

/// Helper function to read one line, without its line ending
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Input stream closed",
        ));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

/// Print a prompt without a trailing newline and flush it
pub fn prompt(message: &str) -> io::Result<()> {
    print!("{}", message);
    io::stdout().flush()
}
