//! Reusable fixtures: `.ipa` archives and a scripted FTP server.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Write a minimal `.ipa` whose `Payload/App.app/Info.plist` holds `entries`
pub fn write_ipa(path: &Path, entries: &[(&str, &str)]) {
    let mut dict = plist::Dictionary::new();
    for (k, v) in entries {
        dict.insert(k.to_string(), plist::Value::String(v.to_string()));
    }
    let mut info = Vec::new();
    plist::Value::Dictionary(dict)
        .to_writer_xml(&mut info)
        .unwrap();

    let mut zip = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
    zip.start_file(
        "Payload/App.app/Info.plist",
        zip::write::SimpleFileOptions::default(),
    )
    .unwrap();
    zip.write_all(&info).unwrap();
    zip.finish().unwrap();
}

/// How the scripted FTP server answers after `USER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpBehavior {
    /// `530` to every `PASS`
    RejectPassword,
    /// Accepts the login, then answers `504` to `TYPE`
    RejectBinaryMode,
}

/// One-connection FTP server following an [`FtpBehavior`]
///
/// Records the commands it receives so tests can check the conversation.
pub struct ScriptedFtpServer {
    pub port: u16,
    pub commands: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl ScriptedFtpServer {
    pub fn start(behavior: FtpBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&commands);

        let handle = thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                serve(stream, behavior, &log);
            }
        });

        Self {
            port,
            commands,
            handle,
        }
    }

    /// Wait for the client to hang up and return the received commands
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap();
        let commands = self.commands.lock().unwrap();
        commands.clone()
    }
}

fn serve(stream: TcpStream, behavior: FtpBehavior, log: &Mutex<Vec<String>>) {
    let mut writer = stream.try_clone().unwrap();
    let reader = BufReader::new(stream);
    let _ = writer.write_all(b"220 test server ready\r\n");

    for line in reader.lines() {
        let Ok(line) = line else { break };
        let verb = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_uppercase();
        log.lock().unwrap().push(verb.clone());
        let reply: &[u8] = match (verb.as_str(), behavior) {
            ("USER", _) => b"331 password required\r\n",
            ("PASS", FtpBehavior::RejectPassword) => b"530 Login incorrect.\r\n",
            ("PASS", FtpBehavior::RejectBinaryMode) => b"230 Logged in.\r\n",
            ("TYPE", FtpBehavior::RejectBinaryMode) => {
                b"504 Command not implemented for that parameter.\r\n"
            }
            ("QUIT", _) => b"221 bye\r\n",
            _ => b"530 Please login with USER and PASS.\r\n",
        };
        if writer.write_all(reply).is_err() || verb == "QUIT" {
            break;
        }
    }
}
