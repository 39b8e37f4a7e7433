//! Role-gated navigation policy
//!
//! A static role → destination table, checked once by `authorize`. Nothing
//! is reachable without an explicit grant; a missing entry redirects to the
//! role's default destination instead of rendering.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trackflow_common::db::{Principal, Role};

/// Navigable screens of the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Login,
    Dashboard,
    Upload,
    Profile,
    Search,
    Rooms,
    DemoReview,
    Coordination,
    Analytics,
    Settings,
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum RouteDecision {
    Allow,
    #[serde(rename = "redirect")]
    RedirectTo { to: Destination },
}

/// Destinations each role may reach. This is configuration, not logic;
/// the enforcement below is deny-by-default.
static ROLE_DESTINATIONS: Lazy<HashMap<Role, &'static [Destination]>> = Lazy::new(|| {
    use Destination::*;
    let mut table: HashMap<Role, &'static [Destination]> = HashMap::new();
    table.insert(Role::Artist, &[Upload, Search, Rooms]);
    table.insert(Role::Arranger, &[Profile, Search, Rooms]);
    table.insert(Role::Engineer, &[Profile, Search, Rooms]);
    table.insert(
        Role::Admin,
        &[Dashboard, DemoReview, Coordination, Rooms, Analytics, Settings],
    );
    table
});

/// Destinations reachable by the given role
pub fn destinations_for(role: Role) -> &'static [Destination] {
    ROLE_DESTINATIONS.get(&role).copied().unwrap_or(&[])
}

/// Landing destination for a role after sign-in or a denied request
pub fn default_destination_for(role: Role) -> Destination {
    match role {
        Role::Admin => Destination::Dashboard,
        Role::Artist => Destination::Upload,
        Role::Arranger | Role::Engineer => Destination::Profile,
    }
}

/// Decide whether a principal (or guest) may reach a destination
///
/// Guests reach only the login screen; everything else redirects there.
/// An authenticated principal without an explicit grant for the requested
/// destination is redirected to its role's default, never rendered.
pub fn authorize(principal: Option<&Principal>, destination: Destination) -> RouteDecision {
    let Some(principal) = principal else {
        if destination == Destination::Login {
            return RouteDecision::Allow;
        }
        return RouteDecision::RedirectTo {
            to: Destination::Login,
        };
    };

    if destinations_for(principal.role).contains(&destination) {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectTo {
            to: default_destination_for(principal.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn principal(role: Role) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", role),
            role,
        }
    }

    #[test]
    fn test_guest_redirected_to_login_everywhere() {
        for destination in [
            Destination::Dashboard,
            Destination::Upload,
            Destination::Profile,
            Destination::Search,
            Destination::Rooms,
            Destination::DemoReview,
            Destination::Coordination,
            Destination::Analytics,
            Destination::Settings,
        ] {
            assert_eq!(
                authorize(None, destination),
                RouteDecision::RedirectTo {
                    to: Destination::Login
                },
                "guest should be redirected from {:?}",
                destination
            );
        }
        assert_eq!(authorize(None, Destination::Login), RouteDecision::Allow);
    }

    #[test]
    fn test_arranger_denied_upload_gets_profile() {
        let arranger = principal(Role::Arranger);
        assert_eq!(
            authorize(Some(&arranger), Destination::Upload),
            RouteDecision::RedirectTo {
                to: Destination::Profile
            }
        );
    }

    #[test]
    fn test_granted_destinations_allowed() {
        let artist = principal(Role::Artist);
        for destination in [Destination::Upload, Destination::Search, Destination::Rooms] {
            assert_eq!(authorize(Some(&artist), destination), RouteDecision::Allow);
        }

        let admin = principal(Role::Admin);
        assert_eq!(
            authorize(Some(&admin), Destination::DemoReview),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_deny_by_default_across_all_roles() {
        use Destination::*;
        let everything = [
            Login,
            Dashboard,
            Upload,
            Profile,
            Search,
            Rooms,
            DemoReview,
            Coordination,
            Analytics,
            Settings,
        ];
        for role in [Role::Artist, Role::Arranger, Role::Engineer, Role::Admin] {
            let p = principal(role);
            let granted = destinations_for(role);
            for destination in everything {
                let decision = authorize(Some(&p), destination);
                if granted.contains(&destination) {
                    assert_eq!(decision, RouteDecision::Allow);
                } else {
                    assert_eq!(
                        decision,
                        RouteDecision::RedirectTo {
                            to: default_destination_for(role)
                        },
                        "{:?} should not reach {:?}",
                        role,
                        destination
                    );
                }
            }
        }
    }

    #[test]
    fn test_defaults_per_role() {
        assert_eq!(default_destination_for(Role::Admin), Destination::Dashboard);
        assert_eq!(default_destination_for(Role::Artist), Destination::Upload);
        assert_eq!(default_destination_for(Role::Arranger), Destination::Profile);
        assert_eq!(default_destination_for(Role::Engineer), Destination::Profile);
    }
}
