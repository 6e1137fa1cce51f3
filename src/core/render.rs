use crate::domain::model::{DisplayProject, Experience, PageData};
use chrono::Datelike;
use std::fmt::Write;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &PageData) -> String {
    render_page_with_year(page, chrono::Local::now().year())
}

pub fn render_page_with_year(page: &PageData, year: i32) -> String {
    let name = escape_html(&page.profile.name);
    let title = escape_html(&page.profile.title);
    let about = escape_html(&page.profile.about);

    let mut html = String::with_capacity(4096);
    // Writing into a String is infallible.
    let _ = write!(
        html,
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{name} · {title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header class="hero">
    <h1>{name}</h1>
    <p class="subtitle">{title}</p>
    <nav>
      <a href="#about">About</a>
      <a href="#projects">Projects</a>
      <a href="#experience">Experience</a>
      <a href="#skills">Skills</a>
    </nav>
  </header>
  <main>
    <section id="about" class="fade-on-scroll">
      <h2>About</h2>
      <p>{about}</p>
    </section>
"##
    );

    render_projects(&mut html, &page.projects);
    render_experience(&mut html, &page.experience);
    render_skills(&mut html, &page.skills);

    let _ = write!(
        html,
        r#"  </main>
  <footer>
    <p>&copy; {year} {name}</p>
  </footer>
  <script src="/static/script.js"></script>
</body>
</html>
"#
    );

    html
}

const NO_DESCRIPTION: &str = "No description available.";

fn project_description(project: &DisplayProject) -> &str {
    if project.description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        &project.description
    }
}

/// Splits an experience description into bullet points on `#`.
/// Blank points are dropped.
pub fn description_points(description: &str) -> Vec<&str> {
    description
        .split('#')
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .collect()
}

fn render_projects(html: &mut String, projects: &[DisplayProject]) {
    html.push_str("    <section id=\"projects\" class=\"fade-on-scroll\">\n      <h2>Projects</h2>\n");
    if projects.is_empty() {
        html.push_str("      <p class=\"empty\">No projects to show right now.</p>\n");
    } else {
        html.push_str("      <div class=\"project-grid\">\n");
        for project in projects {
            let _ = write!(
                html,
                r#"        <article class="project-card">
          <h3><a href="{link}" target="_blank" rel="noopener">{name}</a></h3>
          <p>{description}</p>
        </article>
"#,
                link = escape_html(&project.link),
                name = escape_html(&project.name),
                description = escape_html(project_description(project)),
            );
        }
        html.push_str("      </div>\n");
    }
    html.push_str("    </section>\n");
}

fn render_experience(html: &mut String, experience: &[Experience]) {
    html.push_str("    <section id=\"experience\" class=\"fade-on-scroll\">\n      <h2>Experience</h2>\n");
    if experience.is_empty() {
        html.push_str("      <p class=\"empty\">No experience found.</p>\n");
    }
    for entry in experience {
        let _ = write!(
            html,
            r#"      <div class="experience-item">
        <h3>{role} <span class="company">@ {company}</span></h3>
        <p class="duration">{duration}</p>
"#,
            role = escape_html(&entry.role),
            company = escape_html(&entry.company),
            duration = escape_html(&entry.duration),
        );
        let points = description_points(&entry.description);
        if !points.is_empty() {
            html.push_str("        <ul>\n");
            for point in points {
                let _ = writeln!(html, "          <li>{}</li>", escape_html(point));
            }
            html.push_str("        </ul>\n");
        }
        html.push_str("      </div>\n");
    }
    html.push_str("    </section>\n");
}

fn render_skills(html: &mut String, skills: &[String]) {
    html.push_str("    <section id=\"skills\" class=\"fade-on-scroll\">\n      <h2>Skills</h2>\n      <ul class=\"skills\">\n");
    for skill in skills {
        let _ = writeln!(html, "        <li>{}</li>", escape_html(skill));
    }
    html.push_str("      </ul>\n    </section>\n");
}
