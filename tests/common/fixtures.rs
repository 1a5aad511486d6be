//! Test fixtures - reusable content for tests.

pub const RESOLVED_CONF: &str = "[Resolve]\nDNS=127.0.0.1\nDNSStubListener=no\n";

pub const DNSMASQ_CONF: &str = "listen-address=127.0.0.1\nbind-interfaces\nserver=9.9.9.9\n";

pub const WG_CONF: &str = "[Interface]\nPrivateKey = REDACTED\nAddress = 10.8.0.2/32\n";

/// One manifest item
#[derive(Debug, Clone)]
pub struct ManifestItem {
    pub src: String,
    pub dst: String,
    pub mode: String,
    pub owner: String,
    pub group: String,
}

impl ManifestItem {
    pub fn new(src: &str, dst: &str, mode: &str, owner: &str, group: &str) -> Self {
        Self {
            src: src.to_string(),
            dst: dst.to_string(),
            mode: mode.to_string(),
            owner: owner.to_string(),
            group: group.to_string(),
        }
    }
}

/// Render a manifest document; every value is quoted
pub fn manifest_yaml(items: &[ManifestItem]) -> String {
    if items.is_empty() {
        return "files: []\n".to_string();
    }
    let mut out = String::from("files:\n");
    for item in items {
        out.push_str(&format!(
            "  - src: {:?}\n    dst: {:?}\n    mode: {:?}\n    owner: {:?}\n    group: {:?}\n",
            item.src, item.dst, item.mode, item.owner, item.group
        ));
    }
    out
}
