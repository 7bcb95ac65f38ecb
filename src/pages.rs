// 📄 Page Compositions - Four Pages Over Shared Chrome
// Static HTML rendering; all dynamic data arrives pre-built from the
// asset index and the roster builder

use crate::assets::{AssetIndex, ImageAsset};
use crate::carousel::Carousel;
use crate::content;
use crate::roster::YearGroup;
use crate::routes::Route;
use chrono::{Datelike, Utc};
use std::fmt::Write;

/// Render the page composition for a route
pub fn render(route: Route, index: &AssetIndex, roster: &[YearGroup]) -> String {
    match route {
        Route::Home => render_home(index),
        Route::Board => render_board(roster),
        Route::Events => render_events(index),
        Route::Resources => render_resources(),
    }
}

// ============================================================================
// SHARED CHROME
// ============================================================================

fn page_shell(active: Route, title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title} · {site}</title>\n</head>\n<body>\n{nav}\n<main>\n{body}\n</main>\n{footer}\n</body>\n</html>\n",
        title = escape_html(title),
        site = content::SITE_TITLE,
        nav = navbar(Some(active)),
        footer = footer(),
    )
}

fn navbar(active: Option<Route>) -> String {
    let mut links = String::new();
    for route in Route::ALL {
        let class = if active == Some(route) {
            " class=\"active\""
        } else {
            ""
        };
        let _ = write!(
            links,
            "<a href=\"{}\"{}>{}</a>",
            route.path(),
            class,
            route.label()
        );
    }
    format!(
        "<header class=\"navbar\"><span class=\"brand\">{}</span><nav>{}</nav></header>",
        content::SITE_NAME,
        links
    )
}

fn footer() -> String {
    let mut nav = String::new();
    for route in Route::ALL {
        let _ = write!(
            nav,
            "<li><a href=\"{}\">{}</a></li>",
            route.path(),
            route.label()
        );
    }

    let mut social = String::new();
    for link in content::SOCIAL_LINKS {
        let _ = write!(
            social,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></li>",
            link.href, link.label
        );
    }

    format!(
        "<footer>\
<div class=\"footer-about\"><span class=\"brand\">{site}</span><p>{blurb}</p></div>\
<div class=\"footer-nav\"><h4>Navigation</h4><ul>{nav}</ul></div>\
<div class=\"footer-social\"><h4>Social media</h4><ul>{social}</ul></div>\
<div class=\"footer-subscribe\"><h4>Subscribe to our mailing list</h4>\
<p>Get the club's latest news, events, and stories.</p>\
<a class=\"button\" href=\"{list}\">Subscribe</a>\
<p class=\"copyright\">&copy; {year} {title} &mdash; Privacy Policy</p></div>\
</footer>",
        site = content::SITE_NAME,
        blurb = content::FOOTER_BLURB,
        nav = nav,
        social = social,
        list = content::MAILING_LIST_URL,
        year = Utc::now().year(),
        title = content::SITE_TITLE,
    )
}

fn section(id: Option<&str>, class: &str, inner: &str) -> String {
    match id {
        Some(id) => format!(
            "<section id=\"{}\" class=\"section {}\">{}</section>",
            id, class, inner
        ),
        None => format!("<section class=\"section {}\">{}</section>", class, inner),
    }
}

/// Horizontally scrolling strip over the event photos. The image list is
/// rendered twice so the wrap from last to first never shows a gap. An
/// empty list renders nothing at all.
fn carousel_strip(images: &[ImageAsset]) -> String {
    let carousel = Carousel::new(images.iter().map(|i| i.href.clone()).collect());
    if carousel.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for (i, src) in carousel
        .images()
        .iter()
        .chain(carousel.images().iter())
        .enumerate()
    {
        let _ = write!(
            items,
            "<button class=\"carousel-item\" data-index=\"{}\"><img src=\"{}\" alt=\"Event {}\" loading=\"lazy\"></button>",
            i % carousel.len(),
            src,
            i % carousel.len() + 1
        );
    }

    format!(
        "<div class=\"carousel\" data-interval-ms=\"2500\"><div class=\"carousel-strip\">{}</div></div>",
        items
    )
}

// ============================================================================
// PAGES
// ============================================================================

pub fn render_home(index: &AssetIndex) -> String {
    let mut body = String::new();

    // Hero with stat chips
    let mut chips = String::new();
    for stat in content::HERO_STATS {
        let _ = write!(
            chips,
            "<span class=\"badge\"><strong>{}</strong> {}</span>",
            stat.value, stat.label
        );
    }
    body.push_str(&section(
        Some("home"),
        "hero",
        &format!("<h1>{}</h1><div class=\"stats\">{}</div>", content::SITE_TITLE, chips),
    ));

    body.push_str(&carousel_strip(index.event_images()));

    // Welcome / about with mailing-list and email cards
    body.push_str(&section(
        Some("about"),
        "about",
        &format!(
            "<h2>Welcome!</h2><p>{about}</p>\
<div class=\"cards\">\
<a class=\"card\" href=\"{list}\"><h3>Join Mailing List</h3>\
<p>Join our mailing list for announcements about events and special programs.</p></a>\
<a class=\"card\" href=\"mailto:{email}\"><h3>Email Us</h3>\
<p>E-mail us with any questions or comments.</p></a>\
</div>",
            about = content::ABOUT_BLURB,
            list = content::MAILING_LIST_URL,
            email = content::CONTACT_EMAIL,
        ),
    ));

    // Upcoming events cards
    let mut events = String::new();
    for event in content::UPCOMING_EVENTS {
        let _ = write!(
            events,
            "<article class=\"event-card\"><span class=\"date\">{}</span>\
<h3>{}</h3><p class=\"location\">{}</p>\
<a href=\"{}\">Visit event page</a></article>",
            event.date, event.title, event.location, event.link
        );
    }
    body.push_str(&section(
        Some("events"),
        "upcoming",
        &format!("<h2>Upcoming events</h2><div class=\"cards\">{}</div>", events),
    ));

    page_shell(Route::Home, "Home", &body)
}

pub fn render_board(roster: &[YearGroup]) -> String {
    let mut body = String::new();

    // Year navigation chips, only worth showing with more than one year
    let year_nav = if roster.len() > 1 {
        let mut chips = String::new();
        for group in roster {
            let _ = write!(
                chips,
                "<a class=\"chip\" href=\"#board-{}\">{}</a>",
                escape_html(&group.year),
                escape_html(&group.display_year)
            );
        }
        format!("<div class=\"year-nav\">{}</div>", chips)
    } else {
        String::new()
    };

    body.push_str(&section(
        Some("board"),
        "hero",
        &format!("<p class=\"eyebrow\">Leadership</p><h1>Meet the Board</h1>{}", year_nav),
    ));

    if roster.is_empty() {
        body.push_str(&section(
            None,
            "empty-state",
            "<h2>Board photos coming soon</h2>\
<p>Add photos under <code>photos/board/YYYY</code> and include a matching \
<code>members.json</code> file to showcase your board here.</p>",
        ));
    }

    for (i, group) in roster.iter().enumerate() {
        let mut cards = String::new();
        for member in &group.members {
            let photo = match &member.image_src {
                Some(src) => format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    src,
                    escape_html(&member.name)
                ),
                None => "<div class=\"placeholder\">Photo coming soon</div>".to_string(),
            };
            let position = match &member.position {
                Some(position) => format!("<p class=\"position\">{}</p>", escape_html(position)),
                None => String::new(),
            };
            let _ = write!(
                cards,
                "<article class=\"member\" data-member-id=\"{}\">{}<h3>{}</h3>{}</article>",
                escape_html(&member.id),
                photo,
                escape_html(&member.name),
                position
            );
        }

        let class = if i % 2 == 0 { "board-year" } else { "board-year alt" };
        let inner = format!(
            "<p class=\"eyebrow\">Board {display}</p>\
<h2>Academic Year {display}</h2>\
<span class=\"count\">{count} members</span>\
<div class=\"member-grid\">{cards}</div>",
            display = escape_html(&group.display_year),
            count = group.members.len(),
            cards = cards,
        );
        let id = format!("board-{}", group.year);
        body.push_str(&section(Some(&escape_html(&id)), class, &inner));
    }

    page_shell(Route::Board, "Board", &body)
}

pub fn render_events(index: &AssetIndex) -> String {
    let mut body = String::new();

    body.push_str(&section(
        Some("events"),
        "hero",
        "<p class=\"eyebrow\">Programming</p><h1>Events &amp; Experiences</h1>\
<p>From mentorship and faculty connections to socials, industry spotlights, and outreach, \
WEE events keep our community energized and connected.</p>",
    ));

    body.push_str(&carousel_strip(index.event_images()));

    // Programming tracks; track images resolve against the event photos and
    // fall back to a placeholder block when the file is absent
    let mut tracks = String::new();
    for track in content::PROGRAMMING {
        let photo = index
            .event_images()
            .iter()
            .find(|image| image.file_name == track.image)
            .map(|image| format!("<img src=\"{}\" alt=\"{}\" loading=\"lazy\">", image.href, track.title))
            .unwrap_or_else(|| "<div class=\"placeholder\"></div>".to_string());
        let _ = write!(
            tracks,
            "<article class=\"track\">{}<div><h3>{}</h3><p>{}</p></div></article>",
            photo, track.title, track.description
        );
    }
    body.push_str(&section(
        None,
        "programming",
        &format!(
            "<p class=\"eyebrow\">Programming Overview</p>\
<h2>What we host throughout the year</h2>\
<span class=\"count\">{} key tracks</span>\
<div class=\"tracks\">{}</div>",
            content::PROGRAMMING.len(),
            tracks
        ),
    ));

    // Externally hosted, read-only calendar embed
    body.push_str(&section(
        None,
        "calendar",
        &format!(
            "<p class=\"eyebrow\">Upcoming Events</p>\
<h2>Stay in-sync with our calendar</h2>\
<iframe title=\"{} Calendar\" src=\"{}\" loading=\"lazy\"></iframe>",
            content::SITE_NAME,
            content::CALENDAR_EMBED_URL
        ),
    ));

    page_shell(Route::Events, "Events", &body)
}

pub fn render_resources() -> String {
    let mut body = String::new();

    body.push_str(&section(
        Some("resources"),
        "hero",
        "<p class=\"eyebrow\">Resources</p><h1>Fuel your journey</h1>\
<p>Navigate Stanford and the broader engineering community with curated links to mentorship, \
advocacy groups, and career support.</p>",
    ));

    for (i, group) in content::RESOURCE_GROUPS.iter().enumerate() {
        let mut items = String::new();
        for item in group.items {
            let description = match item.description {
                Some(description) => format!("<p>{}</p>", description),
                None => String::new(),
            };
            let visit = match item.href {
                Some(href) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">Visit site</a>",
                    href
                ),
                None => String::new(),
            };
            let _ = write!(
                items,
                "<article class=\"resource\"><h3>{}</h3>{}{}</article>",
                escape_html(item.name),
                description,
                visit
            );
        }

        let class = if i % 2 == 0 { "resources" } else { "resources alt" };
        let inner = format!(
            "<p class=\"eyebrow\">Resource Spotlight</p>\
<h2>{title}</h2><p>{blurb}</p>\
<span class=\"count\">{count} resources</span>\
<div class=\"resource-list\">{items}</div>",
            title = escape_html(group.title),
            blurb = group.blurb,
            count = group.items.len(),
            items = items,
        );
        body.push_str(&section(Some(&content::slugify(group.title)), class, &inner));
    }

    page_shell(Route::Resources, "Resources", &body)
}

/// Minimal body for paths outside the route table; a server-level concern,
/// not part of the route mapping itself
pub fn render_not_found(path: &str) -> String {
    page_shell(
        Route::Home,
        "Not Found",
        &format!(
            "<section class=\"section empty-state\"><h1>Page not found</h1><p>No page at <code>{}</code>.</p></section>",
            escape_html(path)
        ),
    )
}

// ============================================================================
// ESCAPING
// ============================================================================

/// Escape text derived from file names or metadata before interpolation
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Member;

    fn member(name: &str, position: Option<&str>, image: Option<&str>) -> Member {
        Member {
            id: format!("2023-role-0-{}", name),
            file_name: format!("{}.jpg", name.to_lowercase()),
            name: name.to_string(),
            position: position.map(|p| p.to_string()),
            image_src: image.map(|s| s.to_string()),
        }
    }

    fn group(year: &str, members: Vec<Member>) -> YearGroup {
        YearGroup {
            year: year.to_string(),
            display_year: crate::roster::display_year(year),
            members,
        }
    }

    #[test]
    fn test_navbar_marks_active_route() {
        let html = navbar(Some(Route::Board));
        assert!(html.contains("<a href=\"/board\" class=\"active\">Board</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }

    #[test]
    fn test_board_renders_members_and_placeholder() {
        let roster = vec![group(
            "2023",
            vec![
                member("Alice", Some("President"), Some("/photos/board/2023/alice.jpg?v=0")),
                member("Bob", None, None),
            ],
        )];

        let html = render_board(&roster);

        assert!(html.contains("Academic Year 2023-2024"));
        assert!(html.contains("<h3>Alice</h3>"));
        assert!(html.contains("President"));
        assert!(html.contains("Photo coming soon"));
        assert!(html.contains("2 members"));
    }

    #[test]
    fn test_board_empty_state() {
        let html = render_board(&[]);
        assert!(html.contains("Board photos coming soon"));
    }

    #[test]
    fn test_board_year_nav_needs_multiple_years() {
        let one = vec![group("2023", vec![member("Alice", None, None)])];
        assert!(!render_board(&one).contains("year-nav"));

        let two = vec![
            group("2023", vec![member("Alice", None, None)]),
            group("2022", vec![member("Bob", None, None)]),
        ];
        let html = render_board(&two);
        assert!(html.contains("year-nav"));
        assert!(html.contains("#board-2023"));
    }

    #[test]
    fn test_member_names_are_escaped() {
        let roster = vec![group("2023", vec![member("A<b>&c", None, None)])];
        let html = render_board(&roster);
        assert!(html.contains("A&lt;b&gt;&amp;c"));
        assert!(!html.contains("A<b>&c"));
    }

    #[test]
    fn test_empty_image_list_renders_no_carousel() {
        let index = AssetIndex::default();
        let html = render_home(&index);
        assert!(!html.contains("carousel"));
    }

    #[test]
    fn test_resources_sections_use_slug_ids() {
        let html = render_resources();
        assert!(html.contains("id=\"stanford-women-s-resources\""));
        assert!(html.contains("Visit site"));
    }

    #[test]
    fn test_events_page_embeds_calendar() {
        let index = AssetIndex::default();
        let html = render_events(&index);
        assert!(html.contains(content::CALENDAR_EMBED_URL));
        assert!(html.contains("5 key tracks"));
    }

    #[test]
    fn test_footer_links_all_routes() {
        let html = render_resources();
        for route in Route::ALL {
            assert!(html.contains(&format!("<a href=\"{}\">{}</a>", route.path(), route.label())));
        }
        assert!(html.contains(content::MAILING_LIST_URL));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = render_not_found("/nope<script>");
        assert!(html.contains("/nope&lt;script&gt;"));
    }
}
