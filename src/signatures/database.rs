//! Signature roster persistence - parsing, storage, and file generation

use std::fs;
use std::path::Path;

use log::{info, warn};
use uuid::Uuid;

use super::Signature;

/// Path to the roster file
pub const SIGNATURES_FILE: &str = "config/signatures.txt";

/// The stock roster of 58 names
pub const DEFAULT_NAMES: &[&str] = &[
    "Babe Ruth",
    "Jackie Robinson",
    "Hank Aaron",
    "Willie Mays",
    "Ted Williams",
    "Lou Gehrig",
    "Mickey Mantle",
    "Derek Jeter",
    "Ichiro Suzuki",
    "Albert Pujols",
    "Nolan Ryan",
    "Sandy Koufax",
    "Pedro Martínez",
    "Clayton Kershaw",
    "Greg Maddux",
    "Randy Johnson",
    "Mariano Rivera",
    "Shohei Ohtani",
    "Mike Trout",
    "Mookie Betts",
    "Yogi Berra",
    "Johnny Bench",
    "Roberto Clemente",
    "Cal Ripken Jr.",
    "Ken Griffey Jr.",
    "Barry Bonds",
    "David Ortiz",
    "Tony Gwynn",
    "Stan Musial",
    "Honus Wagner",
    "Joe DiMaggio",
    "Satchel Paige",
    "Walter Johnson",
    "Cy Young",
    "Ozzie Smith",
    "Ryne Sandberg",
    "Chipper Jones",
    "Jeff Bagwell",
    "Craig Biggio",
    "George Brett",
    "Paul Molitor",
    "Frank Thomas",
    "Vladimir Guerrero",
    "Adrián Beltré",
    "Carlos Beltrán",
    "Bryce Harper",
    "Juan Soto",
    "Freddie Freeman",
    "Buck O'Neil",
    "Branch Rickey",
    "Vin Scully",
    "Harry Caray",
    "Bob Uecker",
    "Bill James",
    "Billy Beane",
    "Theo Epstein",
    "Joe Torre",
    "Dusty Baker",
];

/// Ordered roster of signatures
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureRoster {
    pub signatures: Vec<Signature>,
}

impl Default for SignatureRoster {
    fn default() -> Self {
        Self::default_roster()
    }
}

impl SignatureRoster {
    /// The stock roster, all enabled. Ids are position-derived so default
    /// layouts reproduce run to run.
    pub fn default_roster() -> Self {
        Self {
            signatures: DEFAULT_NAMES
                .iter()
                .enumerate()
                .map(|(idx, name)| Signature {
                    id: format!("default_{:02}", idx),
                    name: name.to_string(),
                    enabled: true,
                })
                .collect(),
        }
    }

    /// Build a roster from bare names (a loaded project). Ids are
    /// position-derived and stable; duplicate names stay independent.
    pub fn from_names(names: &[String]) -> Self {
        Self {
            signatures: names
                .iter()
                .enumerate()
                .map(|(idx, name)| Signature {
                    id: format!("sig_{:02}", idx),
                    name: name.clone(),
                    enabled: true,
                })
                .collect(),
        }
    }

    /// Load the roster from file, creating the default file if it doesn't exist
    pub fn load_or_create(path: &str) -> Self {
        if !Path::new(path).exists() {
            info!("Roster file not found, creating default: {}", path);
            let defaults = Self::default_roster();
            if let Err(e) = defaults.write_to_file(path) {
                warn!("Failed to write default roster file: {}", e);
            }
            return defaults;
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                warn!("Failed to load roster from {}: {}, using defaults", path, e);
                Self::default_roster()
            }
        }
    }

    /// Parse roster data from string
    pub fn parse(content: &str) -> Self {
        let mut signatures = Vec::new();
        let mut current: Option<SignatureBuilder> = None;

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix("signature:") {
                if let Some(builder) = current.take() {
                    signatures.push(builder.build(signatures.len()));
                }
                current = Some(SignatureBuilder::new(name.trim()));
            } else if let Some(builder) = &mut current {
                if let Some(id) = line.strip_prefix("id:") {
                    builder.id = Some(id.trim().to_string());
                } else if let Some(flag) = line.strip_prefix("enabled:") {
                    builder.enabled = matches!(flag.trim(), "yes" | "true" | "1");
                }
            }
        }

        if let Some(builder) = current {
            signatures.push(builder.build(signatures.len()));
        }

        if signatures.is_empty() {
            warn!("No signatures parsed, using defaults");
            return Self::default_roster();
        }

        info!("Loaded {} signatures from file", signatures.len());
        Self { signatures }
    }

    /// Write the roster to file
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        content.push_str("# Sigball Signature Roster\n");
        content.push_str("# ========================\n");
        content.push_str("#\n");
        content.push_str("# Format:\n");
        content.push_str("#   signature: <name>    Start a new entry\n");
        content.push_str("#   id: <id>             Stable identity (drives placement)\n");
        content.push_str("#   enabled: yes|no      Disabled entries stay listed but don't render\n");
        content.push_str("#\n");
        content.push_str("# Blank lines and # comments are ignored.\n");
        content.push_str("\n");

        for sig in &self.signatures {
            content.push_str(&format!("signature: {}\n", sig.name));
            content.push_str(&format!("id: {}\n", sig.id));
            content.push_str(&format!("enabled: {}\n", if sig.enabled { "yes" } else { "no" }));
            content.push_str("\n");
        }

        fs::write(path, content)
    }

    /// Add a new signature at the front, minting a fresh id
    pub fn add(&mut self, name: &str) -> &Signature {
        self.signatures.insert(
            0,
            Signature {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                enabled: true,
            },
        );
        &self.signatures[0]
    }

    /// Flip the enabled flag; returns false if the id is unknown
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.signatures.iter_mut().find(|s| s.id == id) {
            Some(sig) => {
                sig.enabled = !sig.enabled;
                true
            }
            None => false,
        }
    }

    /// Remove by id; returns false if the id is unknown
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.signatures.len();
        self.signatures.retain(|s| s.id != id);
        self.signatures.len() != before
    }

    /// Restore the stock roster
    pub fn reset(&mut self) {
        *self = Self::default_roster();
    }

    /// Snapshot of the enabled entries, in roster order
    pub fn enabled(&self) -> Vec<Signature> {
        self.signatures.iter().filter(|s| s.enabled).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Builder for parsing roster entries from file
struct SignatureBuilder {
    name: String,
    id: Option<String>,
    enabled: bool,
}

impl SignatureBuilder {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            enabled: true,
        }
    }

    /// Entries without an id get a stable position-derived one.
    fn build(self, position: usize) -> Signature {
        Signature {
            id: self.id.unwrap_or_else(|| format!("sig_{:02}", position)),
            name: self.name,
            enabled: self.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = SignatureRoster::default_roster();
        assert_eq!(roster.len(), 58);
        assert!(roster.signatures.iter().all(|s| s.enabled));
        assert_eq!(roster.signatures[0].name, "Babe Ruth");
        assert_eq!(roster.signatures[0].id, "default_00");
    }

    #[test]
    fn test_parse_roundtrip() {
        let mut roster = SignatureRoster::default_roster();
        roster.signatures[3].enabled = false;

        let path = std::env::temp_dir().join(format!("sigball_roster_{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        roster.write_to_file(path_str).unwrap();
        let reloaded = SignatureRoster::parse(&fs::read_to_string(path_str).unwrap());
        let _ = fs::remove_file(&path);

        assert_eq!(roster, reloaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let path = std::env::temp_dir().join(format!("sigball_roster_create_{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        let _ = fs::remove_file(&path);

        let roster = SignatureRoster::load_or_create(path_str);
        assert_eq!(roster.len(), 58);
        assert!(Path::new(path_str).exists());

        // Second load reads the file it just wrote.
        let reloaded = SignatureRoster::load_or_create(path_str);
        let _ = fs::remove_file(&path);
        assert_eq!(roster, reloaded);
    }

    #[test]
    fn test_parse_skips_comments_and_unknown_keys() {
        let content = "\
# header
signature: Babe Ruth
id: abc
color: red
enabled: no

signature: Cy Young
";
        let roster = SignatureRoster::parse(content);
        assert_eq!(roster.len(), 2);
        assert!(!roster.signatures[0].enabled);
        assert_eq!(roster.signatures[0].id, "abc");
        // Missing id/enabled fall back to stable defaults.
        assert_eq!(roster.signatures[1].id, "sig_01");
        assert!(roster.signatures[1].enabled);
    }

    #[test]
    fn test_parse_empty_falls_back_to_defaults() {
        let roster = SignatureRoster::parse("# nothing here\n");
        assert_eq!(roster.len(), 58);
    }

    #[test]
    fn test_add_toggle_remove() {
        let mut roster = SignatureRoster::default_roster();
        let id = roster.add("Test Player").id.clone();
        assert_eq!(roster.len(), 59);
        assert_eq!(roster.signatures[0].name, "Test Player");

        assert!(roster.toggle(&id));
        assert!(!roster.signatures[0].enabled);
        assert_eq!(roster.enabled().len(), 58);

        assert!(roster.remove(&id));
        assert_eq!(roster.len(), 58);
        assert!(!roster.remove("no-such-id"));
        assert!(!roster.toggle("no-such-id"));
    }

    #[test]
    fn test_from_names_keeps_duplicates_independent() {
        let names = vec!["Babe Ruth".to_string(), "Babe Ruth".to_string()];
        let roster = SignatureRoster::from_names(&names);
        assert_eq!(roster.len(), 2);
        assert_ne!(roster.signatures[0].id, roster.signatures[1].id);
    }
}
