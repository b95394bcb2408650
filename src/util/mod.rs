pub(crate) mod encode;
pub(crate) mod form;
pub(crate) mod headers;
pub(crate) mod redact;
pub(crate) mod signing;
pub(crate) mod text;
pub(crate) mod url;
pub(crate) mod xml;
