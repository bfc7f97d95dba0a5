//! Team roster shown in the waiting room
//!
//! Static seed data: members are never added or removed at runtime.
//! `waiting_for` refers to another member by display name and may fail
//! to resolve, in which case no dependency link is drawn.

use derive_more::Display;

/// Work status of a roster entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MemberStatus {
    #[display("waiting")]
    Waiting,
    #[display("working")]
    Working,
    #[display("completed")]
    Completed,
}

impl MemberStatus {
    pub fn color(&self) -> &'static str {
        match self {
            MemberStatus::Waiting => "#F59E0B",
            MemberStatus::Working => "#10B981",
            MemberStatus::Completed => "#10B981",
        }
    }
}

/// A roster entry
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub task: &'static str,
    pub status: MemberStatus,
    /// Display name of the member this one is blocked on
    pub waiting_for: Option<&'static str>,
    /// Avatar color token
    pub avatar: &'static str,
    /// Percent complete, only while working
    pub progress: Option<u8>,
    /// How long the member has been blocked, only while waiting
    pub blocked_time: Option<&'static str>,
}

impl TeamMember {
    /// Whether the optional fields match the status
    pub fn is_consistent(&self) -> bool {
        match self.status {
            MemberStatus::Waiting => {
                self.waiting_for.is_some() && self.blocked_time.is_some() && self.progress.is_none()
            }
            MemberStatus::Working => {
                self.progress.is_some_and(|p| p <= 100)
                    && self.waiting_for.is_none()
                    && self.blocked_time.is_none()
            }
            MemberStatus::Completed => {
                self.waiting_for.is_none() && self.blocked_time.is_none() && self.progress.is_none()
            }
        }
    }

    pub fn initials(&self) -> String {
        initials(self.name)
    }

    pub fn first_name(&self) -> &'static str {
        first_name(self.name)
    }

    pub fn task_icon(&self) -> TaskIcon {
        task_icon(self.task)
    }
}

/// The seeded three-member roster
pub fn default_roster() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1",
            name: "Sarah Chen",
            role: "Frontend Developer",
            task: "User Dashboard",
            status: MemberStatus::Waiting,
            waiting_for: Some("Sharath Kumar"),
            avatar: "#6366F1",
            progress: None,
            blocked_time: Some("2h 15m"),
        },
        TeamMember {
            id: "2",
            name: "Sharath Kumar",
            role: "Backend Developer",
            task: "Authentication API",
            status: MemberStatus::Working,
            waiting_for: None,
            avatar: "#10B981",
            progress: Some(78),
            blocked_time: None,
        },
        TeamMember {
            id: "3",
            name: "Mike Johnson",
            role: "QA Engineer",
            task: "Integration Testing",
            status: MemberStatus::Waiting,
            waiting_for: Some("Sarah Chen"),
            avatar: "#F59E0B",
            progress: None,
            blocked_time: Some("45m"),
        },
    ]
}

/// First letter of every word: "Sarah Chen" -> "SC"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

pub fn count_by_status(roster: &[TeamMember], status: MemberStatus) -> usize {
    roster.iter().filter(|m| m.status == status).count()
}

/// A resolved "who waits on whom" edge, by member id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyLink {
    pub from: &'static str,
    pub to: &'static str,
}

/// Resolve every `waiting_for` name to a member id.
/// Names that match no member are skipped.
pub fn dependency_links(roster: &[TeamMember]) -> Vec<DependencyLink> {
    roster
        .iter()
        .filter_map(|member| {
            let target = member.waiting_for?;
            let to = roster.iter().find(|other| other.name == target)?;
            Some(DependencyLink {
                from: member.id,
                to: to.id,
            })
        })
        .collect()
}

pub fn find_by_id<'a>(roster: &'a [TeamMember], id: &str) -> Option<&'a TeamMember> {
    roster.iter().find(|m| m.id == id)
}

/// Icon shown next to a task label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIcon {
    Code,
    Bug,
    Rocket,
    User,
}

pub fn task_icon(task: &str) -> TaskIcon {
    if task.contains("API") {
        TaskIcon::Code
    } else if task.contains("Testing") {
        TaskIcon::Bug
    } else if task.contains("Dashboard") || task.contains("Frontend") {
        TaskIcon::Rocket
    } else {
        TaskIcon::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster_is_consistent() {
        let roster = default_roster();
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(TeamMember::is_consistent));
    }

    #[test]
    fn test_seed_status_counts() {
        let roster = default_roster();
        assert_eq!(count_by_status(&roster, MemberStatus::Waiting), 2);
        assert_eq!(count_by_status(&roster, MemberStatus::Working), 1);
        assert_eq!(count_by_status(&roster, MemberStatus::Completed), 0);
    }

    #[test]
    fn test_inconsistent_member_detected() {
        let mut member = default_roster().remove(1);
        member.blocked_time = Some("1h");
        assert!(!member.is_consistent());

        member.blocked_time = None;
        member.progress = None;
        assert!(!member.is_consistent());
    }

    #[test]
    fn test_status_display_is_lowercase_token() {
        assert_eq!(MemberStatus::Waiting.to_string(), "waiting");
        assert_eq!(MemberStatus::Working.to_string(), "working");
        assert_eq!(MemberStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_initials_and_first_name() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("Sharath Kumar"), "SK");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
        assert_eq!(first_name("Mike Johnson"), "Mike");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_dependency_links_resolve_by_name() {
        let roster = default_roster();
        let links = dependency_links(&roster);
        assert_eq!(
            links,
            vec![
                DependencyLink { from: "1", to: "2" },
                DependencyLink { from: "3", to: "1" },
            ]
        );
    }

    #[test]
    fn test_unresolved_dependency_is_skipped() {
        let mut roster = default_roster();
        roster[0].waiting_for = Some("Nobody Here");
        let links = dependency_links(&roster);
        assert_eq!(links, vec![DependencyLink { from: "3", to: "1" }]);
    }

    #[test]
    fn test_dependency_on_first_name_only_does_not_resolve() {
        let mut roster = default_roster();
        roster[2].waiting_for = Some("Sarah");
        assert_eq!(dependency_links(&roster).len(), 1);
    }

    #[test]
    fn test_task_icons() {
        assert_eq!(task_icon("Authentication API"), TaskIcon::Code);
        assert_eq!(task_icon("Integration Testing"), TaskIcon::Bug);
        assert_eq!(task_icon("User Dashboard"), TaskIcon::Rocket);
        assert_eq!(task_icon("Frontend Components"), TaskIcon::Rocket);
        assert_eq!(task_icon("Hiring"), TaskIcon::User);
    }

    #[test]
    fn test_find_by_id() {
        let roster = default_roster();
        assert_eq!(find_by_id(&roster, "2").map(|m| m.name), Some("Sharath Kumar"));
        assert!(find_by_id(&roster, "9").is_none());
    }
}
