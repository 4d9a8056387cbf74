use std::collections::HashSet;

/// Two static sources, embedded at compile time and unioned at startup.
/// Same data the original deployment shipped as flat JSON files.
const LIST: &str = include_str!("../../../data/list.json");
const NEWLIST: &str = include_str!("../../../data/newlist.json");

/// Read-only set of known disposable-email domains.
///
/// Built exactly once per process (in `main`) and shared with every request
/// through `web::Data`. No request path ever mutates it, so unsynchronized
/// concurrent reads are safe. There is no refresh mechanism; updating the
/// lists means rebuilding the binary.
#[derive(Debug, Clone)]
pub struct Denylist {
    domains: HashSet<String>,
}

impl Denylist {
    /// Loads and unions the two embedded domain lists.
    ///
    /// Entries are lowercased before insertion; duplicates across the two
    /// sources collapse into a single set member.
    pub fn load() -> Result<Self, serde_json::Error> {
        let list: Vec<String> = serde_json::from_str(LIST)?;
        let newlist: Vec<String> = serde_json::from_str(NEWLIST)?;

        let domains = list
            .into_iter()
            .chain(newlist)
            .map(|d| d.to_ascii_lowercase())
            .collect();

        Ok(Self { domains })
    }

    /// Builds a denylist from an explicit set of domains. Test seam.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Membership check. False for anything not listed, including the
    /// empty string.
    pub fn is_disposable(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_lists() {
        let denylist = Denylist::load().expect("embedded lists must parse");
        assert!(!denylist.is_empty());

        // Entries known to appear in each source file.
        assert!(denylist.is_disposable("mailinator.com"));
        assert!(denylist.is_disposable("1secmail.com"));
    }

    #[test]
    fn test_union_dedupes_overlapping_entries() {
        // mailinator.com, yopmail.com and others appear in both files.
        let list: Vec<String> = serde_json::from_str(LIST).unwrap();
        let newlist: Vec<String> = serde_json::from_str(NEWLIST).unwrap();
        let denylist = Denylist::load().unwrap();

        assert!(denylist.len() < list.len() + newlist.len());
    }

    #[test]
    fn test_unknown_domain_is_not_disposable() {
        let denylist = Denylist::load().unwrap();
        assert!(!denylist.is_disposable("gmail.com"));
    }

    #[test]
    fn test_empty_string_is_not_disposable() {
        let denylist = Denylist::load().unwrap();
        assert!(!denylist.is_disposable(""));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let denylist = Denylist::from_domains(["Mailinator.com"]);
        assert!(denylist.is_disposable("MAILINATOR.COM"));
        assert!(denylist.is_disposable("mailinator.com"));
    }

    #[test]
    fn test_from_domains_fake_list() {
        let denylist = Denylist::from_domains(["throwaway.test"]);
        assert!(denylist.is_disposable("throwaway.test"));
        assert!(!denylist.is_disposable("example.com"));
        assert_eq!(denylist.len(), 1);
    }
}
