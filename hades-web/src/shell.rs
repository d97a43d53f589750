//! The SPA shell: `hades/index.tmpl` rendered with the response nonce.
//!
//! The template is compiled into the binary, so a malformed shell fails the
//! build rather than a running server.

use askama::Template;

use crate::error::Result;
use crate::nonce::Nonce;

#[derive(Template)]
#[template(path = "index.tmpl", escape = "html")]
struct IndexTemplate<'a> {
    nonce: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Shell;

impl Shell {
    pub fn render(&self, nonce: &Nonce) -> Result<String> {
        self.render_str(nonce.as_str())
    }

    fn render_str(&self, nonce: &str) -> Result<String> {
        Ok(IndexTemplate { nonce }.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonce::NONCE_BYTES_LEN;

    #[test]
    fn test_nonce_fills_every_site() {
        let nonce = Nonce::from_bytes([0x3c; NONCE_BYTES_LEN]);
        let html = Shell.render(&nonce).unwrap();
        let sites = html.matches("nonce=\"").count();
        assert!(sites >= 2);
        assert_eq!(html.matches(&format!("nonce=\"{nonce}\"")).count(), sites);
    }

    #[test]
    fn test_placeholder_does_not_survive() {
        let nonce = Nonce::generate().unwrap();
        let html = Shell.render(&nonce).unwrap();
        assert!(!html.contains("Nonce"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_nonce_is_html_escaped() {
        let html = Shell.render_str("x\"><script>alert(1)</script>").unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
