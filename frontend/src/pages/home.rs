use yew::prelude::*;

use crate::components::header::Header;
use crate::engine::PresentationEngine;
use crate::pages::content::{
    Icon, EXPERTISE, FOOTER_GROUPS, MARQUEE, PROCESS, SERVICES, STATS, TESTIMONIALS, WORK,
};

fn icon(icon: Icon, size: &'static str) -> Html {
    let shapes = match icon {
        Icon::Layers => html! { <path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5" /> },
        Icon::Code => html! {
            <>
                <polyline points="16 18 22 12 16 6"></polyline>
                <polyline points="8 6 2 12 8 18"></polyline>
            </>
        },
        Icon::Shield => html! { <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" /> },
        Icon::Panel => html! {
            <>
                <rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect>
                <line x1="9" y1="3" x2="9" y2="21"></line>
            </>
        },
        Icon::Cube => html! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path>
        },
        Icon::Pen => html! {
            <>
                <path d="M12 20h9"></path>
                <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4L16.5 3.5z"></path>
            </>
        },
    };
    html! {
        <svg width={size} height={size} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            { shapes }
        </svg>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Engine lives for as long as the page is mounted
    use_effect_with_deps(
        move |_| {
            let engine = PresentationEngine::mount();
            move || drop(engine)
        },
        (),
    );

    html! {
        <>
            <div class="cursor-dot"></div>
            <div class="cursor-outline"></div>

            <Header />

            <main>
                <section class="hero">
                    <video class="hero-video" autoplay=true muted=true loop=true playsinline=true preload="auto">
                        <source src="/assets/vanlab-studio.mp4" type="video/mp4" />
                    </video>
                    <div class="hero-overlay"></div>
                    <div class="vector-bg">
                        <div class="circle circle-1"></div>
                        <div class="circle circle-2"></div>
                        <div class="grid-overlay"></div>
                    </div>
                    <div class="container hero-content">
                        <h1 class="hero-title">
                            <span class="reveal-text">{"We are Artisan"}</span>
                            <span class="reveal-text highlight">{"No Code & Low Code"}</span>
                            <span class="reveal-text">{"Software Developer"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"We craft premium digital experiences with speed and precision. Merging artistic vision with technical efficiency."}
                        </p>
                        <div class="hero-actions">
                            <a href="#contact" class="btn btn-primary-glow">{"Start Your Project"}</a>
                            <a href="#work" class="btn btn-outline">{"View Our Work"}</a>
                        </div>
                    </div>
                </section>

                <section id="services" class="services">
                    <div class="container">
                        <div class="section-header">
                            <h2 class="section-title">{"Our Expertise"}</h2>
                            <p class="section-subtitle">{"Modern solutions for modern businesses."}</p>
                        </div>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|service| html! {
                                <div class="service-card">
                                    <div class="icon-box">{ icon(service.icon, "24") }</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="marquee-section">
                    // listed twice so the scroll loops without a gap
                    <div class="marquee-content">
                        { for MARQUEE.iter().chain(MARQUEE.iter()).map(|name| html! { <span>{*name}</span> }) }
                    </div>
                </section>

                <section id="work" class="work">
                    <div class="container">
                        <div class="section-header">
                            <h2 class="section-title">{"Featured Work"}</h2>
                            <p class="section-subtitle">{"Crafted with precision, delivered with excellence."}</p>
                        </div>
                        <div class="work-grid">
                            { for WORK.iter().map(|item| html! {
                                <div class="work-card">
                                    <div class="work-image">
                                        <div class="work-placeholder" style={format!("background: {}", item.gradient)}></div>
                                    </div>
                                    <div class="work-info">
                                        <h3>{item.title}</h3>
                                        <p>{item.body}</p>
                                        <div class="work-tags">
                                            { for item.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                                        </div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="process">
                    <div class="container">
                        <div class="section-header">
                            <h2 class="section-title">{"Our Process"}</h2>
                            <p class="section-subtitle">{"From concept to launch, we've got you covered."}</p>
                        </div>
                        <div class="process-timeline">
                            { for PROCESS.iter().enumerate().map(|(i, (title, body))| html! {
                                <div class="process-step">
                                    <div class="step-number">{format!("{:02}", i + 1)}</div>
                                    <div class="step-content">
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="about" class="founder">
                    <div class="container">
                        <div class="founder-content">
                            <div class="founder-image-wrapper">
                                <img src="/assets/novan-profile.png" alt="Novan Bagus - Founder" class="founder-image" width="400" height="400" />
                                <div class="founder-badge">
                                    <span class="badge-number">{"12+"}</span>
                                    <p class="badge-label">{"Years"}</p>
                                </div>
                            </div>
                            <div class="founder-info">
                                <div class="section-label">{"Tech Artisan"}</div>
                                <h2>{"Meet the Founder"}</h2>
                                <h3>{"Novan Bagus"}</h3>
                                <p class="founder-intro">
                                    {"A seasoned technology consultant with over 12 years of experience transforming businesses through strategic technology implementation. As the founder of multiple successful companies and startups, Novan brings a unique dual perspective, combining deep technical expertise with sharp business acumen."}
                                </p>
                                <div class="expertise-grid">
                                    { for EXPERTISE.iter().map(|item| html! {
                                        <div class="expertise-item">
                                            <div class="expertise-icon">{ icon(item.icon, "20") }</div>
                                            <div>
                                                <h4>{item.title}</h4>
                                                <p>{item.body}</p>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                                <p class="founder-mission">
                                    {"\"At Vanlab, we believe technology should empower businesses, not complicate them. Through artisan no-code and low-code solutions, we help organizations achieve their digital transformation goals with speed, precision, and elegance.\""}
                                </p>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="testimonials">
                    <div class="container">
                        <div class="section-header">
                            <h2 class="section-title">{"Client Stories"}</h2>
                            <p class="section-subtitle">{"Don't just take our word for it."}</p>
                        </div>
                        <div class="testimonials-grid">
                            { for TESTIMONIALS.iter().map(|t| html! {
                                <div class="testimonial-card">
                                    <div class="quote-icon">{"\""}</div>
                                    <p class="testimonial-text">{t.quote}</p>
                                    <div class="testimonial-author">
                                        <div class="author-avatar">{t.initials}</div>
                                        <div class="author-info">
                                            <h4>{t.name}</h4>
                                            <p>{t.role}</p>
                                        </div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="stats">
                    <div class="container">
                        <div class="stats-grid">
                            { for STATS.iter().map(|(target, label)| html! {
                                <div class="stat-item">
                                    <div class="stat-number" data-target={target.to_string()}>{"0"}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <div class="container">
                        <div class="contact-content">
                            <div class="contact-info">
                                <h2>{"Let's Build Something Amazing"}</h2>
                                <p>{"Ready to transform your idea into reality? Get in touch with us and let's discuss how we can help you achieve your goals."}</p>
                                <div class="contact-details">
                                    <div class="contact-item">
                                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                                            <polyline points="22,6 12,13 2,6"></polyline>
                                        </svg>
                                        <span>{"artisan@vanlab.digital"}</span>
                                    </div>
                                    <div class="contact-item">
                                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"></path>
                                            <circle cx="12" cy="10" r="3"></circle>
                                        </svg>
                                        <span>{"Jakarta, ID"}</span>
                                    </div>
                                </div>
                            </div>
                            <form class="contact-form">
                                <div class="form-group">
                                    <input type="text" placeholder="Your Name" required=true />
                                </div>
                                <div class="form-group">
                                    <input type="email" placeholder="Your Email" required=true />
                                </div>
                                <div class="form-group">
                                    <input type="text" placeholder="Project Budget" />
                                </div>
                                <div class="form-group">
                                    <textarea placeholder="Tell us about your project" rows="5" required=true />
                                </div>
                                <button type="submit" class="btn btn-primary-glow">{"Send Message"}</button>
                            </form>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <div class="container footer-content">
                    <div class="footer-brand">
                        <img src="/assets/logo.png" alt="Vanlab Logo" class="footer-logo" />
                        <p>{"Artisan No Code & Low Code"}<br />{"Software Developer Agency"}</p>
                    </div>
                    <div class="footer-links">
                        { for FOOTER_GROUPS.iter().map(|(heading, links)| html! {
                            <div class="link-group">
                                <h4>{*heading}</h4>
                                { for links.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                            </div>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Vanlab. All rights reserved."}</p>
                </div>
            </footer>
        </>
    }
}
