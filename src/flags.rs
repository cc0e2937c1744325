/// Token introducing each flag, e.g. `--b bucket`
pub const DELIMITER: &str = "--";
/// Value given to a flag written without a value token
pub const NONE: &str = "NONE";

/// Flags parsed from one shell line
///
/// Entries keep the order in which a name was first seen; a repeated name
/// overwrites the earlier value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    entries: Vec<(String, String)>,
    pub error: String,
    pub length: usize,
}

impl Flags {
    pub fn parse(line: &str) -> Flags {
        let segments: Vec<&str> = line.split(DELIMITER).collect();
        if segments.len() == 1 {
            return Flags { length: 1, ..Default::default() };
        }

        let mut flags = Flags::default();
        for segment in segments {
            let segment = segment.trim();
            // Text before the first delimiter is usually empty
            if segment.is_empty() {
                continue;
            }
            let (name, value) = match segment.split_once(' ') {
                Some((name, value)) => (name, value.trim()),
                None => (segment, ""),
            };
            flags.insert(name, if value.is_empty() { NONE } else { value });
            flags.length += 1;
        }
        flags
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => self.entries.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Raw value, including the `NONE` sentinel
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a flag that was given with a value
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| *value != NONE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[test]
fn test_no_delimiter() {
    for line in ["", "justtext", "upload bucket"] {
        let flags = Flags::parse(line);
        assert_eq!(flags.length, 1);
        assert_eq!(flags.iter().count(), 0);
        assert_eq!(flags.error, "");
    }
}

#[test]
fn test_all_upload_flags() {
    let flags = Flags::parse("--b bucket1 --c acme --f /tmp/x --n file.png");
    assert_eq!(flags.length, 4);
    assert_eq!(flags.iter().collect::<Vec<_>>(), vec![
        ("b", "bucket1"),
        ("c", "acme"),
        ("f", "/tmp/x"),
        ("n", "file.png"),
    ]);
}

#[test]
fn test_missing_value() {
    let flags = Flags::parse("--b");
    assert_eq!(flags.get("b"), Some(NONE));
    assert_eq!(flags.value("b"), None);

    let flags = Flags::parse("upload --b   --c acme");
    assert_eq!(flags.get("b"), Some(NONE));
    assert_eq!(flags.get("c"), Some("acme"));
}

#[test]
fn test_last_duplicate_wins() {
    let flags = Flags::parse("--b one --c acme --b two");
    assert_eq!(flags.get("b"), Some("two"));
    assert_eq!(flags.iter().next(), Some(("b", "two")));
    assert_eq!(flags.length, 3);
}

#[test]
fn test_leading_text_is_a_flag() {
    let flags = Flags::parse("upload --b bucket1");
    assert_eq!(flags.get("upload"), Some(NONE));
    assert_eq!(flags.get("b"), Some("bucket1"));
    assert_eq!(flags.get(""), None);
    assert_eq!(flags.length, 2);
}

#[test]
fn test_value_keeps_spaces() {
    let flags = Flags::parse("--f /tmp/my file.png --n out.png");
    assert_eq!(flags.value("f"), Some("/tmp/my file.png"));
}

#[test]
fn test_bare_delimiter() {
    let flags = Flags::parse("--");
    assert_eq!(flags.length, 0);
    assert_eq!(flags.iter().count(), 0);
}
