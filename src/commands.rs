pub mod flags;
pub mod quick_copy;
pub mod title;
pub mod transform;

use crate::text::is_blank;

pub(crate) fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !is_blank(line)).count()
}
