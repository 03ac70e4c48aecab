//! Project card markup.

use crate::model::project::Project;
use crate::render::escape_html;
use crate::viewport::Viewport;

/// Renders one project as a grid column holding a card.
///
/// `index` is the card position in store order; it only drives the
/// scroll-animation stagger.
pub fn render_card(project: &Project, index: usize, viewport: Viewport) -> String {
    let tags: String = project
        .technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(tech)))
        .collect();
    let github = project
        .github
        .as_deref()
        .map(|href| link(href, "github-link", "fab fa-github", "GitHub"))
        .unwrap_or_default();
    let live = project
        .live
        .as_deref()
        .map(|href| link(href, "live-link", "fas fa-external-link-alt", "Live Demo"))
        .unwrap_or_default();
    let title = escape_html(&project.title);

    format!(
        concat!(
            r#"<div class="col-lg-4 col-md-6 col-sm-12 mb-4" data-aos="fade-up" data-aos-delay="{delay}" data-project-id="{id}">"#,
            r#"<div class="project-card h-100">"#,
            r#"<img src="{src}" alt="{title}" class="project-image" loading="lazy">"#,
            r#"<div class="project-content d-flex flex-column">"#,
            r#"<h4 class="project-title">{title}</h4>"#,
            r#"<p class="project-description">{description}</p>"#,
            r#"<div class="project-technologies">{tags}</div>"#,
            r#"<div class="project-links mt-auto">{github}{live}</div>"#,
            "</div></div></div>",
        ),
        delay = viewport.card_animation_delay_ms(index),
        id = project.id,
        src = escape_html(&project.image),
        title = title,
        description = escape_html(&project.description),
        tags = tags,
        github = github,
        live = live,
    )
}

fn link(href: &str, class: &str, icon: &str, label: &str) -> String {
    format!(
        r#"<a href="{href}" target="_blank" class="project-link {class}" rel="noopener noreferrer"><i class="{icon}"></i> {label}</a>"#,
        href = escape_html(href),
    )
}

#[cfg(test)]
mod tests {
    use super::render_card;
    use crate::model::project::ProjectDraft;
    use crate::viewport::Viewport;

    #[test]
    fn card_contains_one_tag_per_technology() {
        let project = ProjectDraft::new("ERP", "College ERP")
            .with_technologies_text("Python, Django, Python")
            .into_project(1);
        let html = render_card(&project, 0, Viewport::default());
        assert_eq!(html.matches(r#"class="tech-tag""#).count(), 3);
        assert!(html.contains(r#"<h4 class="project-title">ERP</h4>"#));
    }

    #[test]
    fn absent_links_render_no_anchor() {
        let project = ProjectDraft::new("Auth", "Login")
            .with_github("https://github.com/x/auth")
            .with_live("")
            .into_project(2);
        let html = render_card(&project, 1, Viewport::default());
        assert!(html.contains("github-link"));
        assert!(!html.contains("live-link"));
        assert!(html.contains(r#"data-aos-delay="100""#));
    }

    #[test]
    fn user_text_is_escaped() {
        let project = ProjectDraft::new("<script>", "a & b").into_project(1);
        let html = render_card(&project, 0, Viewport::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
