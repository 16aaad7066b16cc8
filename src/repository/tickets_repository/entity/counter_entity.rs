use serde::Deserialize;

#[derive(Deserialize)]
pub struct CounterEntity {
    pub seq: i64,
}
