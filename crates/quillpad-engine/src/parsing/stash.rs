use std::borrow::Cow;

/// Finished HTML fragments held out of the text while later passes run.
///
/// Each held fragment is replaced by a placeholder: its index wrapped in a
/// pair of private-use code points. Placeholders contain no markup trigger
/// characters and nothing that HTML escaping rewrites, so they travel through
/// line classification, escaping and inline formatting untouched until
/// [`Stash::restore`] swaps the fragments back in.
#[derive(Debug)]
pub struct Stash {
    open: char,
    close: char,
    fragments: Vec<String>,
}

impl Stash {
    /// Delimiters for fragments produced by the code extraction pass.
    pub const BLOCK: (char, char) = ('\u{E000}', '\u{E001}');
    /// Delimiters for fragments produced while formatting a single line.
    pub const INLINE: (char, char) = ('\u{E002}', '\u{E003}');

    pub fn new((open, close): (char, char)) -> Self {
        Self {
            open,
            close,
            fragments: Vec::new(),
        }
    }

    pub fn block() -> Self {
        Self::new(Self::BLOCK)
    }

    pub fn inline() -> Self {
        Self::new(Self::INLINE)
    }

    /// Holds `html` aside and returns the placeholder standing in for it.
    pub fn hold(&mut self, html: String) -> String {
        let token = format!("{}{}{}", self.open, self.fragments.len(), self.close);
        self.fragments.push(html);
        token
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Replaces every placeholder in `text` with the fragment it stands for.
    ///
    /// Anything that merely looks like a placeholder but does not name a held
    /// fragment is left as it is.
    pub fn restore(&self, text: &str) -> String {
        if self.fragments.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(self.open) {
            out.push_str(&rest[..start]);
            let after = &rest[start + self.open.len_utf8()..];
            let held = after.find(self.close).and_then(|end| {
                after[..end]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .map(|fragment| (fragment, end))
            });
            match held {
                Some((fragment, end)) => {
                    out.push_str(fragment);
                    rest = &after[end + self.close.len_utf8()..];
                }
                None => {
                    out.push(self.open);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Replaces placeholder delimiters found in authored text so that input can
/// never forge a placeholder.
pub fn scrub(text: &str) -> Cow<'_, str> {
    let reserved = [Stash::BLOCK.0, Stash::BLOCK.1, Stash::INLINE.0, Stash::INLINE.1];
    if text.contains(reserved) {
        Cow::Owned(text.replace(reserved, "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}
