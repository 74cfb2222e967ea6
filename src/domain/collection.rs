use super::models::Member;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Members indexed by ID
///
/// Serialized as a plain list so archived snapshots keep the shape of the
/// original document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Member>", into = "Vec<Member>")]
pub struct MemberCollection {
    members: BTreeMap<String, Member>,
}

impl MemberCollection {
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Insert or replace a member, keyed by its ID
    pub fn add(&mut self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Member> {
        self.members.values_mut()
    }

    /// Members referencing the given confederation
    pub fn in_confederation<'a>(&'a self, conf_id: &'a str) -> impl Iterator<Item = &'a Member> {
        self.iter().filter(move |m| m.conf_id == conf_id)
    }

    pub fn into_vec(self) -> Vec<Member> {
        self.members.into_values().collect()
    }
}

impl From<Vec<Member>> for MemberCollection {
    fn from(members: Vec<Member>) -> Self {
        members.into_iter().collect()
    }
}

impl From<MemberCollection> for Vec<Member> {
    fn from(collection: MemberCollection) -> Self {
        collection.into_vec()
    }
}

impl FromIterator<Member> for MemberCollection {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut collection = Self::new();
        for member in iter {
            collection.add(member);
        }
        collection
    }
}
