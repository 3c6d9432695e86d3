//! Teams (squads)

/// A competing team
///
/// `members` is not kept in sync with `User::team_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub points: i64,
    pub rank: u32,
    pub members: Vec<String>,
}

/// Partial update for a [`Team`]; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub points: Option<i64>,
    pub rank: Option<u32>,
    pub members: Option<Vec<String>>,
}

impl TeamPatch {
    /// Shallow-merge the set fields into `team`
    pub fn apply(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(logo) = self.logo {
            team.logo = logo;
        }
        if let Some(description) = self.description {
            team.description = description;
        }
        if let Some(points) = self.points {
            team.points = points;
        }
        if let Some(rank) = self.rank {
            team.rank = rank;
        }
        if let Some(members) = self.members {
            team.members = members;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock;

    #[test]
    fn test_patch_description() {
        let mut team = mock::teams().remove(0);
        let before = team.clone();

        TeamPatch {
            description: Some("Nueva doctrina.".to_string()),
            ..Default::default()
        }
        .apply(&mut team);

        assert_eq!(team.description, "Nueva doctrina.");
        assert_eq!(team.name, before.name);
        assert_eq!(team.members, before.members);
    }

    #[test]
    fn test_patch_members_replaces_list() {
        let mut team = mock::teams().remove(1);
        TeamPatch {
            members: Some(vec!["u2".to_string()]),
            ..Default::default()
        }
        .apply(&mut team);

        assert_eq!(team.members, vec!["u2".to_string()]);
    }
}
