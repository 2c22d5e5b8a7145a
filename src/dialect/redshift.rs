use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "AES128", "AES256", "ALLOWOVERWRITE", "ANALYSE", "ANALYZE", "ARRAY", "BACKUP", "BINARY",
        "BLANKSASNULL", "BYTEDICT", "BZIP2", "CREDENTIALS", "CURRENT_USER_ID", "DEFLATE",
        "DEFRAG", "DELTA", "DELTA32K", "DISABLE", "DISTKEY", "DO", "EMPTYASNULL", "ENABLE",
        "ENCODE", "ENCRYPT", "ENCRYPTION", "EXPLICIT", "FREEZE", "GLOBALDICT256",
        "GLOBALDICT64K", "GZIP", "IGNORE", "ILIKE", "ISNULL", "LIMIT", "LOCALTIME",
        "LOCALTIMESTAMP", "LUN", "LUNS", "LZO", "LZOP", "MINUS", "MOSTLY13", "MOSTLY32",
        "MOSTLY8", "NEW", "NOTNULL", "NULLS", "OFF", "OFFLINE", "OFFSET", "OID", "OLD",
        "PARALLEL", "PARTITION", "PERCENT", "PERMISSIONS", "PLACING", "RAW", "READRATIO",
        "RECOVER", "REJECTLOG", "RESORT", "RESPECT", "RESTORE", "SIMILAR", "SNAPSHOT",
        "SORTKEY", "SYSDATE", "SYSTEM", "TABLESAMPLE", "TDES", "TEXT255", "TEXT32K", "TOP",
        "TRUNCATECOLUMNS", "VERBOSE", "WALLET", "WITHOUT",
    ])
});

/// Amazon Redshift, a PostgreSQL descendant with its own reserved words.
#[derive(Debug, Clone, Copy)]
pub struct Redshift;

impl Dialect for Redshift {
    fn name(&self) -> &'static str {
        "redshift"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
