use super::{attr, banner, page, text};
use crate::entities::{
    identity_config::ResolvedIdentity, project::ProjectSummary, site_config::SiteConfig,
};

pub struct LandingPage<'a> {
    pub site: &'a SiteConfig,
    pub identity: Option<&'a ResolvedIdentity>,
    pub projects: &'a [ProjectSummary],
    pub github_account: &'a str,
    pub flash: Option<&'a str>,
}

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/in/playfairs"),
    ("Twitter", "https://twitter.com/playfairs"),
    ("Discord", "https://discord.gg/heresy"),
];

const SLIDER_STYLE: &str = concat!(
    "<style>",
    "@keyframes slide-left{from{transform:translateX(0)}to{transform:translateX(-50%)}}",
    ".animate-slide-left{animation:slide-left 20s linear infinite}",
    ".group:hover .pause-animation{animation-play-state:paused}",
    "</style>"
);

fn project_link(project: &ProjectSummary) -> String {
    let mut label = text(&project.name).into_owned();
    if let Some(language) = project.language.as_deref().filter(|l| !l.is_empty()) {
        label.push_str(&format!(" ({})", text(language)));
    }
    if project.stars > 0 {
        label.push_str(&format!(" \u{2605} {}", project.stars));
    }
    format!(
        concat!(
            "<a href=\"{url}\" title=\"{description}\" target=\"_blank\" rel=\"noopener noreferrer\"",
            " class=\"flex-shrink-0 mx-4 text-sm text-gray-300 hover:text-white transition duration-300\">{label}</a>"
        ),
        url = attr(&project.url),
        description = attr(project.description.as_deref().unwrap_or_default()),
        label = label,
    )
}

/// Projects are listed twice so the marquee loops without a gap.
fn project_slider(projects: &[ProjectSummary]) -> String {
    if projects.is_empty() {
        return String::new();
    }
    let links: String = projects.iter().chain(projects).map(project_link).collect();
    format!(
        concat!(
            "<div class=\"w-full bg-gray-800 py-2 overflow-hidden relative group\">",
            "<div class=\"flex animate-slide-left pause-animation\">{}</div></div>"
        ),
        links
    )
}

fn identity_card(identity: &ResolvedIdentity) -> String {
    let avatar = identity
        .avatar_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                concat!(
                    "<div class=\"w-32 h-32 mb-6 rounded-full border-4 border-blue-400 overflow-hidden\">",
                    "<img src=\"{}\" alt=\"Profile Avatar\" class=\"w-full h-full object-cover\"></div>"
                ),
                attr(url)
            )
        })
        .unwrap_or_default();
    let handle = if identity.discriminator.is_empty() || identity.discriminator == "0" {
        text(&identity.username).into_owned()
    } else {
        format!("{}#{}", text(&identity.username), text(&identity.discriminator))
    };
    format!(
        concat!(
            "{avatar}",
            "<p class=\"text-lg text-blue-200\">{handle}</p>",
            "<p class=\"text-gray-400 capitalize\">Status: {status}</p>"
        ),
        avatar = avatar,
        handle = handle,
        status = text(identity.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Unknown")),
    )
}

fn social_links(github_account: &str) -> String {
    let github = format!("https://github.com/{}", urlencoding::encode(github_account));
    std::iter::once(("GitHub", github.as_str()))
        .chain(SOCIAL_LINKS)
        .map(|(name, url)| {
            format!(
                concat!(
                    "<a href=\"{url}\" title=\"{name}\" target=\"_blank\" rel=\"noopener noreferrer\"",
                    " class=\"text-gray-400 hover:text-white transition duration-300\">{name}</a>"
                ),
                url = attr(url),
                name = text(name),
            )
        })
        .collect()
}

pub fn render(landing: &LandingPage<'_>) -> String {
    let site = landing.site;
    let title = if site.title.is_empty() { "Developer" } else { site.title.as_str() };
    let subtitle = if site.subtitle.is_empty() {
        "Passionate developer exploring the intersection of technology and creativity. Always learning, always growing."
    } else {
        site.subtitle.as_str()
    };

    let body = format!(
        concat!(
            "<div class=\"min-h-screen {bg} {fg} flex flex-col\">",
            "{slider}",
            "<div class=\"container mx-auto px-4 py-16 flex-grow flex flex-col items-center justify-center\">",
            "{flash}",
            "<div class=\"max-w-4xl w-full bg-gray-800 rounded-2xl shadow-2xl overflow-hidden flex\">",
            "<div class=\"w-1/3 bg-gray-700 p-8 flex flex-col items-center\">",
            "{identity}",
            "<h2 class=\"text-2xl font-bold {accent} mb-2\">{title}</h2>",
            "<div class=\"flex justify-center space-x-4 mt-4\">{social}</div>",
            "</div>",
            "<div class=\"w-2/3 p-8\">",
            "<h3 class=\"text-3xl font-bold {accent} mb-4\">About Me</h3>",
            "<p class=\"text-gray-300 mb-6\">{subtitle}</p>",
            "<a href=\"/message\" class=\"inline-block bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition duration-300\">Send Me a Message</a>",
            "</div></div></div>",
            "<footer class=\"bg-gray-800 text-gray-400 py-4 text-center\"><p>&copy; {title}. All rights reserved.</p></footer>",
            "{style}</div>"
        ),
        bg = attr(&site.background_color),
        fg = attr(&site.text_color),
        accent = attr(&site.accent_color),
        slider = project_slider(landing.projects),
        flash = banner(landing.flash, "green"),
        identity = landing.identity.map(identity_card).unwrap_or_default(),
        title = text(title),
        subtitle = text(subtitle),
        social = social_links(landing.github_account),
        style = SLIDER_STYLE,
    );
    page(&format!("{title} - Professional Network"), "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, stars: u64, language: Option<&str>) -> ProjectSummary {
        ProjectSummary {
            name: name.into(),
            description: None,
            url: format!("https://github.com/p/{name}"),
            stars,
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn renders_site_text_and_colors() {
        let site = SiteConfig::default();
        let html = render(&LandingPage {
            site: &site,
            identity: None,
            projects: &[],
            github_account: "playfairs",
            flash: None,
        });
        assert!(html.contains("Playfairs.cc"));
        assert!(html.contains("bg-gray-900 text-gray-100"));
        assert!(html.contains("https://github.com/playfairs"));
        assert!(!html.contains("animate-slide-left pause-animation"));
        assert!(!html.contains("Status:"));
    }

    #[test]
    fn projects_are_doubled_for_the_marquee() {
        let site = SiteConfig::default();
        let projects = [project("biolink", 2, Some("Rust")), project("dots", 0, None)];
        let html = render(&LandingPage {
            site: &site,
            identity: None,
            projects: &projects,
            github_account: "playfairs",
            flash: None,
        });
        assert_eq!(html.matches("https://github.com/p/biolink").count(), 2);
        assert!(html.contains("biolink (Rust) \u{2605} 2"));
        assert!(!html.contains("dots \u{2605}"));
    }

    #[test]
    fn identity_card_shows_handle_and_status() {
        let site = SiteConfig::default();
        let identity = ResolvedIdentity {
            username: "playfairs".into(),
            discriminator: "1234".into(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/1/a.png".into()),
            status: Some("idle".into()),
        };
        let html = render(&LandingPage {
            site: &site,
            identity: Some(&identity),
            projects: &[],
            github_account: "playfairs",
            flash: Some("Your message has been sent successfully!"),
        });
        assert!(html.contains("playfairs#1234"));
        assert!(html.contains("Status: idle"));
        assert!(html.contains("src=\"https://cdn.discordapp.com/avatars/1/a.png\""));
        assert!(html.contains("Your message has been sent successfully!"));
    }
}
