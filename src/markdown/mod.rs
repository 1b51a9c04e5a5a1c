//! Line-level markup handling: segmentation, directive comments, and the
//! pattern matchers shared by the classifier and the content structurer.

pub(crate) mod directive;
pub(crate) mod elements;
pub(crate) mod segment;
