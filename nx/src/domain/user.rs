//! Competitors and their badges

/// An unlockable achievement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked_at: Option<String>,
}

/// A competitor
///
/// `rank` is stored as given and is never derived from `points`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub points: i64,
    pub rank: u32,
    pub team_id: Option<String>,
    pub is_team_admin: bool,
    pub badges: Vec<Badge>,
}

impl User {
    /// Whether the user has earned the badge with this id
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|b| b.id == badge_id)
    }
}

/// Partial update for a [`User`]; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub points: Option<i64>,
    pub rank: Option<u32>,
    pub team_id: Option<String>,
    pub is_team_admin: Option<bool>,
    pub badges: Option<Vec<Badge>>,
}

impl UserPatch {
    /// Shallow-merge the set fields into `user`
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(points) = self.points {
            user.points = points;
        }
        if let Some(rank) = self.rank {
            user.rank = rank;
        }
        if let Some(team_id) = self.team_id {
            user.team_id = Some(team_id);
        }
        if let Some(is_team_admin) = self.is_team_admin {
            user.is_team_admin = is_team_admin;
        }
        if let Some(badges) = self.badges {
            user.badges = badges;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mock;

    #[test]
    fn test_patch_only_touches_set_fields() {
        let mut user = mock::users().remove(0);
        let before = user.clone();

        UserPatch {
            name: Some("Neo Prime".to_string()),
            ..Default::default()
        }
        .apply(&mut user);

        assert_eq!(user.name, "Neo Prime");
        assert_eq!(user.email, before.email);
        assert_eq!(user.points, before.points);
        assert_eq!(user.rank, before.rank);
        assert_eq!(user.badges, before.badges);
    }

    #[test]
    fn test_patch_points_does_not_rerank() {
        let mut user = mock::users().remove(1);
        UserPatch {
            points: Some(99_999),
            ..Default::default()
        }
        .apply(&mut user);

        assert_eq!(user.points, 99_999);
        assert_eq!(user.rank, 2);
    }

    #[test]
    fn test_empty_patch() {
        let mut user = mock::users().remove(0);
        let before = user.clone();
        UserPatch::default().apply(&mut user);
        assert_eq!(user, before);
    }

    #[test]
    fn test_has_badge() {
        let user = mock::users().remove(0);
        assert!(user.has_badge("1"));
        assert!(user.has_badge("2"));
        assert!(!user.has_badge("4"));
    }
}
