use crate::dialect::{keywords, Capability, Dialect, LimitStyle};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ABORT", "ABORTSESSION", "ACCESS_LOCK", "ACCOUNT", "AMP", "BUT", "BYTE", "BYTEINT",
        "CASESPECIFIC", "CHECKPOINT", "COLLECT", "COMPRESS", "CS", "CT", "DATABASE",
        "DATABLOCKSIZE", "DEL", "DUAL", "ECHO", "EQ", "ERROR", "ERRORFILES", "ERRORTABLES",
        "FALLBACK", "FASTEXPORT", "FORMAT", "FREESPACE", "GE", "GIVE", "GT", "HASH", "HELP",
        "INS", "JOURNAL", "LE", "LOCKING", "LOGON", "LOGOFF", "LT", "MACRO", "MAXIMUM",
        "MINIMUM", "MLOAD", "MODE", "MONITOR", "NE", "NULLIFZERO", "PERM", "QUALIFY",
        "QUANTILE", "REPLCONTROL", "RETRIEVE", "SAMPLE", "SEL", "SPOOL", "SS", "STARTUP",
        "TITLE", "TYPE", "UC", "UPPERCASE", "VOLATILE", "ZEROIFNULL",
    ])
});

/// Teradata quirks: `TOP n` without offsets and the `QUALIFY` heritage.
#[derive(Debug, Clone, Copy)]
pub struct Teradata;

impl Dialect for Teradata {
    fn name(&self) -> &'static str {
        "teradata"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin | Capability::RightOuterJoin | Capability::CrossJoin
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Top
    }
}
