// 📋 Site Content - Hard-Coded Copy as Data
// Everything the pages render that is not derived from scanned assets

pub const SITE_NAME: &str = "WEE";
pub const SITE_TITLE: &str = "Stanford Women in Electrical Engineering";

pub const ABOUT_BLURB: &str = "Stanford's Women in Electrical Engineering (WEE) student group was \
founded in 2004 and has grown in size and engagement throughout the years. The organization \
fosters a sense of community among EE students through programming that includes mentoring, \
community service, outreach, and social events. In addition, WEE provides opportunities for \
professional development and networking across all of the engineering disciplines. Anyone of \
any gender who supports these goals is welcome to attend events and join the group.";

pub const FOOTER_BLURB: &str = "Empower women in electrical engineering at Stanford through \
community, mentorship, and professional growth.";

pub const MAILING_LIST_URL: &str = "https://mailman.stanford.edu/mailman/listinfo/wee-network";
pub const CONTACT_EMAIL: &str = "stanfordwee@gmail.com";
pub const CALENDAR_EMBED_URL: &str =
    "https://calendar.google.com/calendar/embed?src=stanfordwee%40gmail.com&ctz=America%2FLos_Angeles";

// ============================================================================
// CONTENT TYPES
// ============================================================================

pub struct StatChip {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ProgramTrack {
    pub title: &'static str,
    pub description: &'static str,
    /// Event-photo file name used as the track illustration
    pub image: &'static str,
}

pub struct UpcomingEvent {
    pub date: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub link: &'static str,
}

pub struct ResourceItem {
    pub name: &'static str,
    pub href: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub struct ResourceGroup {
    pub title: &'static str,
    pub blurb: &'static str,
    pub items: &'static [ResourceItem],
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

// ============================================================================
// STATIC DATA
// ============================================================================

pub const HERO_STATS: &[StatChip] = &[
    StatChip { value: "128", label: "members" },
    StatChip { value: "20+", label: "years at Stanford" },
    StatChip { value: "5", label: "program tracks" },
    StatChip { value: "4", label: "events per quarter" },
    StatChip { value: "unlimited", label: "positive vibes" },
];

pub const PROGRAMMING: &[ProgramTrack] = &[
    ProgramTrack {
        title: "Mentorship Program",
        description: "Our mentorship program is designed to help incoming graduate students \
navigate Stanford. Mentors help students get acquainted with the university and EE program, \
provide advice on topics such as joining research groups, and serve as friendly faces to ease \
the transition to graduate life.",
        image: "mentorship.jpg",
    },
    ProgramTrack {
        title: "Faculty Lunches",
        description: "These informal lunches give graduate students an opportunity to share a \
meal with faculty, learn about their career paths, and hear candid perspectives on work/life \
balance and academia.",
        image: "faculty_lunch.jpg",
    },
    ProgramTrack {
        title: "Socials",
        description: "Social events strengthen our community by fostering personal and \
professional networks among students and alumnae. Expect boba, board games, crafts, and more \
every quarter!",
        image: "socials.jpg",
    },
    ProgramTrack {
        title: "Industry Events",
        description: "We host leaders across industries to help students discover careers \
outside academia, promote networking, and get inspired. Join us for meals, fireside chats, and \
technical career conversations.",
        image: "industry.jpg",
    },
    ProgramTrack {
        title: "Outreach",
        description: "Participate in community service that introduces youth to STEM and sparks \
curiosity. Outreach programs make it possible to give back while representing WEE in the \
broader community.",
        image: "outreach.jpg",
    },
];

pub const UPCOMING_EVENTS: &[UpcomingEvent] = &[
    UpcomingEvent {
        date: "Oct 02",
        title: "Fall Welcome Social",
        location: "Packard Building Courtyard",
        link: "/events",
    },
    UpcomingEvent {
        date: "Oct 16",
        title: "Faculty Lunch",
        location: "Allen Building, Room 101",
        link: "/events",
    },
    UpcomingEvent {
        date: "Nov 06",
        title: "Industry Fireside Chat",
        location: "Huang Engineering Center",
        link: "/events",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/stanfordwee/",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/stanford-wee/",
    },
];

pub const RESOURCE_GROUPS: &[ResourceGroup] = &[
    ResourceGroup {
        title: "Stanford Women's Resources",
        blurb: "Campus groups offering mentorship, community, and support for women across \
engineering.",
        items: &[
            ResourceItem {
                name: "WCC - Women's Community Center",
                href: Some("https://wcc.stanford.edu/"),
                description: None,
            },
            ResourceItem {
                name: "WiCS - Women in Computer Science",
                href: Some("http://web.stanford.edu/group/wics/"),
                description: None,
            },
            ResourceItem {
                name: "SWE - Society of Women Engineers",
                href: Some("http://swe.stanford.edu"),
                description: None,
            },
            ResourceItem {
                name: "WISE Groups - Women in Science and Engineering Small Groups",
                href: Some("https://vpge.stanford.edu/events/programs/wise-and-wissh-groups-women"),
                description: None,
            },
            ResourceItem {
                name: "VMware Women's Leadership Innovation Lab",
                href: Some("https://womensleadership.stanford.edu"),
                description: None,
            },
        ],
    },
    ResourceGroup {
        title: "External Women's Organizations",
        blurb: "National and regional communities to expand your network beyond the Farm.",
        items: &[
            ResourceItem {
                name: "WIE - IEEE Women in Engineering",
                href: Some("http://www.ieee.org/membership_services/membership/women/index.html"),
                description: None,
            },
            ResourceItem {
                name: "WEPAN - Women Engineering ProActive Network",
                href: Some("http://www.wepan.org/"),
                description: None,
            },
            ResourceItem {
                name: "SWE - Society of Women Engineers",
                href: Some("http://societyofwomenengineers.swe.org/"),
                description: None,
            },
            ResourceItem {
                name: "AWIS Palo Alto Chapter",
                href: Some("http://pa-awis.weebly.com/"),
                description: None,
            },
        ],
    },
    ResourceGroup {
        title: "Career Resources",
        blurb: "Career development, mentoring, and professional growth resources tailored for \
engineers.",
        items: &[
            ResourceItem {
                name: "BEAM: Stanford Career Education",
                href: Some("https://beam.stanford.edu/"),
                description: None,
            },
            ResourceItem {
                name: "Stanford Computer Forum",
                href: Some("http://forum.stanford.edu/index.php"),
                description: Some(
                    "EECS-focused career fairs, workshops, company info sessions, and more.",
                ),
            },
            ResourceItem {
                name: "VPGE: Office of the Vice Provost for Graduate Education",
                href: Some("https://vpge.stanford.edu/"),
                description: Some(
                    "Mentoring programs, leadership workshops, and guidance for graduate students.",
                ),
            },
            ResourceItem {
                name: "Additional EE Career Resources",
                href: Some("https://ee.stanford.edu/student-resources/career-resources"),
                description: None,
            },
        ],
    },
    ResourceGroup {
        title: "In Pursuit of Equality",
        blurb: "Stories, initiatives, and organizations championing a more inclusive future in \
STEM.",
        items: &[
            ResourceItem {
                name: "Lean In",
                href: Some("http://leanin.org/"),
                description: None,
            },
            ResourceItem {
                name: "Wogrammer",
                href: Some("http://www.wogrammer.org/"),
                description: None,
            },
            ResourceItem {
                name: "Miss CEO",
                href: Some("http://www.missceo.org"),
                description: Some(
                    "Leadership education, mentorship, and career exploration programs that \
empower young women.",
                ),
            },
        ],
    },
];

/// Section anchor id derived from a group title: lowercase, with every run
/// of non-alphanumeric characters collapsed to a single dash
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_run = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Stanford Women's Resources"), "stanford-women-s-resources");
        assert_eq!(slugify("Career Resources"), "career-resources");
    }

    #[test]
    fn test_slugify_keeps_trailing_dash_for_trailing_punctuation() {
        assert_eq!(slugify("Equality!"), "equality-");
    }

    #[test]
    fn test_resource_groups_have_items() {
        assert!(!RESOURCE_GROUPS.is_empty());
        assert!(RESOURCE_GROUPS.iter().all(|g| !g.items.is_empty()));
    }
}
