//! Serialization and Deserialization implementation

use std::collections::HashMap;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};
use ipnet::IpNet;

use crate::RouteTable;

impl<T: Serialize> Serialize for RouteTable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map: HashMap<IpNet, &T> = HashMap::from_iter(self);
        map.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RouteTable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map: HashMap<IpNet, T> = HashMap::deserialize(deserializer)?;
        Ok(Self::from_iter(map))
    }
}
