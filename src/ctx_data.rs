use crate::{db::Conn, dictionary::SqliteDictionary};

#[derive(Debug)]
pub struct CtxData {
    pub dictionary: SqliteDictionary,
}

impl CtxData {
    pub fn new(db: Conn) -> Self {
        Self {
            dictionary: SqliteDictionary::new(db),
        }
    }
}
