//! Plugins for enhancing the default implementation of dollarmath can be defined in this module.

#[cfg(feature = "mathml")]
#[cfg_attr(docsrs, doc(cfg(feature = "mathml")))]
pub mod mathml;
