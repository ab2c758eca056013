use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{COMPANY, SECTIONS, SITE_NAME, SITE_TITLE};

use super::{
    contact::ContactSection, cursor::cursor_hover, dom::scroll_to_section, footer::Footer,
    projects::ProjectsSection, services::ServicesSection, stepper::Stepper,
};

const SKILLS: [(&str, &str); 10] = [
    ("React", "devicon-react-original"),
    ("Next.js", "devicon-nextjs-plain"),
    ("TypeScript", "devicon-typescript-plain"),
    ("JavaScript", "devicon-javascript-plain"),
    ("Node.js", "devicon-nodejs-plain"),
    ("Express", "devicon-express-original"),
    ("MongoDB", "devicon-mongodb-plain"),
    ("Firebase", "devicon-firebase-plain"),
    ("Tailwind CSS", "devicon-tailwindcss-original"),
    ("Git", "devicon-git-plain"),
];

const STATS: [(&str, &str); 3] = [
    ("2+", "Years building for the web"),
    ("20+", "Projects shipped"),
    ("100%", "Client satisfaction"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <ProjectsSection />
        <ServicesSection />
        <ContactSection />
        <Footer />
        <Stepper sections=&SECTIONS />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen pt-24 pb-16 flex items-center justify-center overflow-hidden bg-gradient-to-b from-foreground/5 via-background to-foreground/5 text-foreground"
        >
            <div class="max-w-7xl mx-auto px-6 w-full flex flex-col items-center">
                <div class="relative flex items-center justify-center">
                    <h2 class="hero-word hero-word-left text-5xl lg:text-7xl font-serif font-bold">
                        "Web"
                    </h2>
                    <div class="w-64 h-80 lg:w-80 lg:h-96 rounded-2xl overflow-hidden hero-portrait">
                        <img
                            src="/images/profile.png"
                            alt=format!("{SITE_NAME} - Developer")
                            width="320"
                            height="384"
                            class="w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-700"
                        />
                    </div>
                    <h2 class="hero-word hero-word-right text-5xl lg:text-7xl font-mono font-bold">
                        "Developer"
                    </h2>
                </div>
                <div class="text-center mt-20 hero-intro">
                    <h1 class="text-4xl md:text-5xl font-serif font-bold mb-4">
                        {format!("Hi, I'm {}", SITE_NAME.split_whitespace().next().unwrap_or(SITE_NAME))}
                    </h1>
                    <p class="text-lg md:text-xl mb-8 max-w-2xl mx-auto text-muted font-light">
                        "A passionate developer blending modern tech with timeless design."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#projects"
                            class="btn btn-primary"
                            on:click=|ev| {
                                ev.prevent_default();
                                scroll_to_section("projects");
                            }
                            use:cursor_hover
                        >
                            <i class="extra-code" aria-hidden="true"></i>
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            class="btn btn-outline"
                            on:click=|ev| {
                                ev.prevent_default();
                                scroll_to_section("contact");
                            }
                            use:cursor_hover
                        >
                            <i class="extra-email" aria-hidden="true"></i>
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-background text-foreground">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="badge">"About"</span>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mt-4">"About Me"</h2>
                    <p class="text-lg text-muted mt-4 max-w-2xl mx-auto">
                        "Passionate web developer with a love for minimalism, detail, and timeless design."
                    </p>
                </div>
                <div class="grid gap-12 lg:grid-cols-2">
                    <div class="flex flex-col gap-4 text-base leading-relaxed">
                        <h3 class="text-2xl font-serif font-bold">"My Story"</h3>
                        <p>
                            "It started with pure curiosity and endless nights of exploring how the web really works."
                        </p>
                        <p>
                            "I started with HTML and CSS, fell in love with React, and eventually built projects using "
                            <strong>"Next.js, Node.js and MongoDB"</strong>
                            ". I care about clean code, performance, and user-first experiences."
                        </p>
                        <p>
                            {format!("Today I work as a {SITE_TITLE} at {COMPANY}, ")}
                            "and every project I build is a reflection of patience, persistence, and purpose."
                        </p>
                    </div>
                    <div class="flex flex-col gap-8">
                        <div>
                            <h3 class="text-2xl font-serif font-bold mb-4">"Technologies I Use"</h3>
                            <ul class="flex flex-wrap gap-3">
                                {SKILLS
                                    .iter()
                                    .map(|&(name, icon)| {
                                        view! {
                                            <li
                                                class="flex items-center gap-2 px-3 py-2 rounded-lg border border-foreground/20"
                                                title=name
                                            >
                                                <i class=format!("{icon} text-xl") aria-hidden="true"></i>
                                                <span class="text-sm">{name}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="grid grid-cols-3 gap-4">
                            {STATS
                                .iter()
                                .map(|&(value, label)| {
                                    view! {
                                        <div class="text-center p-4 rounded-xl border border-foreground/20">
                                            <p class="text-3xl font-bold">{value}</p>
                                            <p class="text-xs text-muted mt-1">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
