use anyhow::{bail, Result};

use super::models::{Confederation, Member, Tier};

/// Form data for creating or editing a confederation.
///
/// `id: None` creates a new confederation under a generated ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfederationDraft {
    pub id: Option<String>,
    pub name: String,
    pub tier: Tier,
    pub image_url: Option<String>,
    pub active: bool,
}

impl ConfederationDraft {
    pub fn new(name: &str, tier: Tier) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            tier,
            image_url: None,
            active: true,
        }
    }

    pub fn into_confederation(self, id: String) -> Result<Confederation> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("Confederation name must not be empty");
        }

        Ok(Confederation {
            id,
            name: name.to_string(),
            tier: self.tier,
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            active: self.active,
        })
    }
}

/// A fresh member of `conf` with an empty game grid
pub fn new_member(id: &str, conf: &Confederation, name: &str, team_name: &str) -> Result<Member> {
    let (name, team_name) = (name.trim(), team_name.trim());
    if name.is_empty() || team_name.is_empty() {
        bail!("Member name and team name are required");
    }
    Ok(Member::new(id, name, team_name, &conf.id))
}
