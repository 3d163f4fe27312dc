//! Basic pretty printing facilities

use pretty::{DocAllocator, DocBuilder, RcAllocator};

/// Default page width for rendered output
pub const DEFAULT_WIDTH: usize = 80;

pub trait ToPretty {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone;
}

/// Render to a string at the default width
pub fn prettify<I>(expr: &I) -> String
where
    I: ToPretty,
{
    prettify_width(expr, DEFAULT_WIDTH)
}

/// Render to a string, breaking lines which exceed `width`
pub fn prettify_width<I>(expr: &I, width: usize) -> String
where
    I: ToPretty,
{
    let allocator = RcAllocator;
    let doc = expr.pretty::<_, ()>(&allocator).append(allocator.line());
    format!("{}", doc.1.pretty(width))
}
