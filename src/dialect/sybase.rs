use crate::dialect::{keywords, Capability, Dialect, LimitStyle, OuterStyle};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ARITH_OVERFLOW", "BREAK", "BROWSE", "BULK", "CHAR_CONVERT", "CHECKPOINT", "CLUSTERED",
        "COMPUTE", "CONFIRM", "CONTROLROW", "DATABASE", "DBCC", "DISK", "DUMMY", "DUMP",
        "ENDTRAN", "ERRLVL", "ERRORDATA", "ERROREXIT", "EXCLUSIVE", "EXIT", "EXP_ROW_SIZE",
        "FILLFACTOR", "HOLDLOCK", "IDENTITY_GAP", "IDENTITY_INSERT", "IDENTITY_START", "IF",
        "INDEX", "JOINTRANSACTION", "KILL", "LINENO", "LOAD", "LOCK", "MAX_ROWS_PER_PAGE",
        "MIRROR", "MIRROREXIT", "NOHOLDLOCK", "NONCLUSTERED", "NUMERIC_TRUNCATION", "OFF",
        "OFFSETS", "ONCE", "ONLINE", "OVER", "PARTITION", "PERM", "PERMANENT", "PLAN", "PRINT",
        "PROC", "PROCESSEXIT", "PROXY_TABLE", "QUIESCE", "RAISERROR", "READPAST", "READTEXT",
        "RECONFIGURE", "REPLACE", "REPLICATION", "RESERVEPAGEGAP", "RETURN", "ROLE",
        "ROWCOUNT", "RULE", "SAVE", "SETUSER", "SHARED", "SHUTDOWN", "STATISTICS",
        "STRINGSIZE", "STRIPE", "SYB_IDENTITY", "SYB_RESTREE", "SYB_TERMINATE", "TEXTSIZE",
        "TOP", "TRAN", "TRIGGER", "TRUNCATE", "TSEQUAL", "UNPARTITION", "USE", "USER_OPTION",
        "WAITFOR", "WHILE", "WRITETEXT",
    ])
});

/// Sybase ASE quirks: `TOP n` without offsets and the `*=` outer markers.
#[derive(Debug, Clone, Copy)]
pub struct Sybase;

impl Dialect for Sybase {
    fn name(&self) -> &'static str {
        "sybase"
    }

    fn quote_open(&self) -> char {
        '['
    }

    fn quote_close(&self) -> char {
        ']'
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::RightOuterJoin | Capability::CrossJoin | Capability::LegacyOuterMarkers
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Top
    }

    fn legacy_outer_marker(&self) -> Option<OuterStyle> {
        Some(OuterStyle::StarOperator)
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }
}
