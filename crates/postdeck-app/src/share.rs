//! Share-link builders
//!
//! Pure URL construction for the share targets the client offers. Values
//! are percent-encoded the way a browser's `encodeURIComponent` would.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// `encodeURIComponent` keeps `- _ . ! ~ * ' ( )` unescaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Share links for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub facebook: String,
}

/// Build the share links for a post title and its public URL
pub fn share_links(title: &str, post_url: &str) -> ShareLinks {
    let title = utf8_percent_encode(title, COMPONENT);
    let url = utf8_percent_encode(post_url, COMPONENT);

    ShareLinks {
        whatsapp: format!("https://wa.me/?text={title}%20{url}"),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_url_are_percent_encoded() {
        let links = share_links("Seaside Trip", "https://blog.example/posts/3");

        assert_eq!(
            links.whatsapp,
            "https://wa.me/?text=Seaside%20Trip%20https%3A%2F%2Fblog.example%2Fposts%2F3"
        );
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fblog.example%2Fposts%2F3"
        );
    }

    #[test]
    fn test_component_encoding_keeps_mark_characters() {
        let links = share_links("it's (fine)!", "https://x.example/");
        assert!(links.whatsapp.contains("it's%20(fine)!"));
    }
}
