//! Interactive credential prompt.
//!
//! Username is read as a line from the input stream. Password is read with
//! terminal echo disabled via `rpassword`.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use super::{CredentialError, CredentialSource, Credentials};

type PasswordReader = fn() -> io::Result<String>;

/// Prompts on the terminal for a username and password.
pub struct TerminalCredentials<R, W> {
    input: R,
    output: W,
    read_password: PasswordReader,
}

impl TerminalCredentials<BufReader<Stdin>, Stdout> {
    /// Prompt on stdout, read the username from stdin and the password from the tty.
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
            read_password: rpassword::read_password,
        }
    }
}

impl<R: BufRead, W: Write> TerminalCredentials<R, W> {
    /// Use custom streams; `read_password` replaces the echo-less tty read.
    pub fn with_io(input: R, output: W, read_password: PasswordReader) -> Self {
        Self {
            input,
            output,
            read_password,
        }
    }

    fn prompt(&mut self, field: &'static str, text: &str) -> Result<(), CredentialError> {
        write!(self.output, "{text}")
            .and_then(|_| self.output.flush())
            .map_err(|source| CredentialError::Io { field, source })
    }

    fn read_username(&mut self) -> Result<String, CredentialError> {
        self.prompt("username", "Enter Username: ")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| CredentialError::Io {
                field: "username",
                source,
            })?;
        if read == 0 {
            return Err(CredentialError::Missing("username"));
        }
        Ok(line)
    }

    fn read_password(&mut self) -> Result<String, CredentialError> {
        self.prompt("password", "Enter Password: ")?;
        let password = (self.read_password)().map_err(|source| CredentialError::Io {
            field: "password",
            source,
        })?;
        // echo was off, so the user's newline never reached the screen
        writeln!(self.output).map_err(|source| CredentialError::Io {
            field: "password",
            source,
        })?;
        Ok(password)
    }
}

impl<R: BufRead, W: Write> CredentialSource for TerminalCredentials<R, W> {
    fn read_credentials(&mut self) -> Result<Credentials, CredentialError> {
        let username = self.read_username()?;
        let password = self.read_password()?;
        Ok(Credentials::new(username, password))
    }
}
