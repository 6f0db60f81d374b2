use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use std::borrow::Cow;

/// A single `#` comment line.
///
/// `text` excludes the leading `#` and the line terminator, and borrows from
/// the source. Consecutive comment lines form a *comment group*
/// (`Vec<Comment>`), which is what nodes and
/// [`Document::unattached_comments`](crate::ast::Document::unattached_comments)
/// hold.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Comment<'src> {
    pub text: Cow<'src, str>,
    pub location: Option<Location>,
}

#[inherent]
impl<'src> AstNode<'src> for Comment<'src> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Comment
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn comments(&self) -> Option<&[Comment<'src>]> {
        None
    }

    pub fn visit_children(&self, _visitor: &mut dyn FnMut(&dyn AstNode<'src>)) {}
}

/// Joins a comment group into one text, one line per comment.
///
/// A single-line group borrows its text; longer groups allocate one owned
/// `String` whose lifetime is that of the returned value.
pub fn comment_group_text<'a>(group: &'a [Comment<'_>]) -> Cow<'a, str> {
    match group {
        [] => Cow::Borrowed(""),
        [single] => Cow::Borrowed(&single.text),
        [first, rest @ ..] => {
            let capacity = group.iter().map(|c| c.text.len() + 1).sum();
            let mut text = String::with_capacity(capacity);
            text.push_str(&first.text);
            for comment in rest {
                text.push('\n');
                text.push_str(&comment.text);
            }
            Cow::Owned(text)
        }
    }
}
