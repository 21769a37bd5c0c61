use crate::components::mirror_modal::MirrorModal;
use crate::components::nav::NavBar;
use crate::config;
use crate::content::{
    Section, CONTACT_CARDS, FOOTER_BADGES, GALLERY, HERO_IMAGE, MIRROR_FEATURES,
    MIRROR_PREVIEW_IMAGE, SERVICES, TESTIMONIALS,
};
use crate::mirror::{BrowserTimer, MirrorAction, MirrorError, MirrorSession, MirrorState, OpenGeneration, UploadedImage};
use crate::utils::scroll::smooth_scroll_to;
use yew::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let mirror = use_reducer(MirrorState::default);
    let session = {
        let dispatcher = mirror.dispatcher();
        use_memo(
            move |_| {
                MirrorSession::new(
                    BrowserTimer,
                    Callback::from(move |action: MirrorAction| dispatcher.dispatch(action)),
                )
            },
            (),
        )
    };

    let open_mirror = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.open())
    };

    let close_mirror = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.close())
    };

    let on_photo = {
        let session = session.clone();
        Callback::from(
            move |(generation, result): (OpenGeneration, Result<UploadedImage, MirrorError>)| {
                session.accept_upload(generation, result)
            },
        )
    };

    let book_style = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.close();
            smooth_scroll_to(Section::Contact);
        })
    };

    let view_services = Callback::from(|_: MouseEvent| smooth_scroll_to(Section::Services));

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <NavBar />

            <section id={Section::Home.anchor_id()} class="hero">
                <img class="hero-background" src={config::asset_url(HERO_IMAGE)} alt="Modern Barbershop Interior" />
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="gradient-text">{"Precision"}</span>
                        <br/>
                        <span>{"Meets Prediction"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Step into the future of grooming. Where artificial intelligence meets the art of precision cutting in our cyber-noir barbershop experience."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_mirror.clone()}>
                            <i class="fas fa-camera"></i>{" Try AI Styler"}
                        </button>
                        <button class="hero-secondary" onclick={view_services}>
                            {"View Services"}
                        </button>
                    </div>
                </div>
                <div class="hero-scroll-hint"><i class="fas fa-chevron-down"></i></div>
            </section>

            <section id={Section::AiMirror.anchor_id()} class="mirror-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2><span class="gradient-text cyan">{"The Virtual Mirror"}</span></h2>
                        <p>{"Experience the future of hairstyling. Our AI analyzes your features and predicts your perfect cut before you sit in the chair."}</p>
                    </div>
                    <div class="mirror-grid">
                        <div class="mirror-pitch">
                            <div class="card">
                                <h3><i class="fas fa-wand-magic-sparkles"></i>{" AI-Powered Analysis"}</h3>
                                <p>{"Our advanced neural networks analyze facial structure, hair texture, and growth patterns to recommend the perfect style for you."}</p>
                                <ul>
                                    { for MIRROR_FEATURES.iter().map(|feature| html! {
                                        <li><i class="fas fa-bolt"></i>{*feature}</li>
                                    }) }
                                </ul>
                            </div>
                            <button class="hero-cta wide" onclick={open_mirror}>
                                <i class="fas fa-camera"></i>{" Launch Virtual Mirror"}
                            </button>
                        </div>
                        <div class="mirror-preview">
                            <img src={config::asset_url(MIRROR_PREVIEW_IMAGE)} alt="AI Virtual Mirror Interface" loading="lazy" />
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Services.anchor_id()} class="services-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2><span class="gradient-text gold">{"Precision Services"}</span></h2>
                        <p>{"Each service is enhanced by AI precision and executed with master craftsmanship."}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="card service-card">
                                <i class={classes!("fas", service.icon, "service-icon")}></i>
                                <h3>{service.name}</h3>
                                <p class="service-description">{service.description}</p>
                                <div class="service-meta">
                                    <span class="service-price">{service.price}</span>
                                    <span class="service-duration">{service.duration}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Gallery.anchor_id()} class="gallery-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2><span class="gradient-text">{"Precision Gallery"}</span></h2>
                        <p>{"Witness the artistry. Every cut is a masterpiece crafted with mathematical precision."}</p>
                    </div>
                    <div class="gallery-grid">
                        { for GALLERY.iter().map(|tile| html! {
                            <div class="gallery-tile">
                                <img src={config::asset_url(tile.image)} alt={tile.alt} loading="lazy" />
                                <div class="gallery-caption">
                                    <h3>{tile.title}</h3>
                                    <p>{tile.caption}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="testimonials-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2><span class="gradient-text gold">{"Client Reviews"}</span></h2>
                    </div>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="card testimonial">
                                <div class="testimonial-header">
                                    <div class="avatar">{t.avatar()}</div>
                                    <div>
                                        <h4>{t.name}</h4>
                                        <div class="stars">
                                            { for (0..t.rating).map(|_| html! { <i class="fas fa-star"></i> }) }
                                        </div>
                                    </div>
                                </div>
                                <blockquote>{format!("\"{}\"", t.text)}</blockquote>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Contact.anchor_id()} class="contact-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2><span class="gradient-text cyan">{"Book Your Session"}</span></h2>
                    </div>
                    <div class="contact-grid">
                        <div class="contact-cards">
                            { for CONTACT_CARDS.iter().map(|card| html! {
                                <div class="card contact-card">
                                    <h3><i class={classes!("fas", card.icon)}></i>{" "}{card.title}</h3>
                                    <p>
                                        { for card.lines.iter().map(|line| html! { <>{*line}<br/></> }) }
                                    </p>
                                </div>
                            }) }
                        </div>
                        <div class="card booking-card">
                            <h3>{"Book Now"}</h3>
                            <form class="booking-form">
                                <input type="text" placeholder="Your Name" />
                                <input type="email" placeholder="Email Address" />
                                <select>
                                    <option>{"Select Service"}</option>
                                    { for SERVICES.iter().map(|service| html! {
                                        <option>{service.booking_option()}</option>
                                    }) }
                                </select>
                                <textarea placeholder="Special Requests" rows="4"></textarea>
                                <button type="submit" class="hero-cta wide">{"Book Appointment"}</button>
                            </form>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="landing-footer">
                <div class="brand">{"The Razor's Edge AI"}</div>
                <p>{"Where precision meets prediction"}</p>
                <div class="footer-badges">
                    { for FOOTER_BADGES.iter().map(|(icon, label)| html! {
                        <span><i class={classes!("fas", *icon)}></i>{" "}{*label}</span>
                    }) }
                </div>
            </footer>

            <MirrorModal
                state={(*mirror).clone()}
                generation={session.generation()}
                on_close={close_mirror}
                on_photo={on_photo}
                on_book={book_style}
            />

            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(135deg, #0f172a, #1e293b 50%, #000);
        color: #fff;
        overflow-x: hidden;
        font-family: system-ui, sans-serif;
    }
    .gradient-text {
        background: linear-gradient(90deg, #22d3ee, #60a5fa, #facc15);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .gradient-text.cyan {
        background: linear-gradient(90deg, #22d3ee, #60a5fa);
        -webkit-background-clip: text;
    }
    .gradient-text.gold {
        background: linear-gradient(90deg, #facc15, #fb923c);
        -webkit-background-clip: text;
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.3;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.5), transparent);
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 80rem;
        padding: 0 1rem;
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #d1d5db;
        max-width: 48rem;
        margin: 0 auto 2rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .hero-cta {
        background: linear-gradient(90deg, #06b6d4, #3b82f6);
        color: #fff;
        border: none;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        box-shadow: 0 10px 25px rgba(6, 182, 212, 0.25);
        transition: transform 0.3s ease;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta.wide {
        width: 100%;
        border-radius: 12px;
    }
    .hero-secondary {
        background: transparent;
        color: #facc15;
        border: 2px solid #facc15;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 600;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .hero-secondary:hover {
        background: #facc15;
        color: #000;
    }
    .hero-scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        color: #22d3ee;
        font-size: 2rem;
        animation: hint-bounce 1s infinite;
    }
    @keyframes hint-bounce {
        0%, 100% { transform: translate(-50%, -25%); }
        50% { transform: translate(-50%, 0); }
    }
    section {
        padding: 5rem 0;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #d1d5db;
        max-width: 48rem;
        margin: 0 auto;
    }
    .card {
        background: linear-gradient(135deg, rgba(30, 41, 59, 0.6), rgba(15, 23, 42, 0.6));
        border: 1px solid rgba(6, 182, 212, 0.2);
        border-radius: 16px;
        padding: 1.5rem;
    }
    .mirror-section {
        background: linear-gradient(180deg, #000, #0f172a);
    }
    .mirror-grid, .contact-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 3rem;
        align-items: center;
    }
    .mirror-pitch {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .mirror-pitch h3 {
        color: #22d3ee;
        font-size: 1.5rem;
    }
    .mirror-pitch p {
        color: #d1d5db;
    }
    .mirror-pitch ul {
        list-style: none;
        padding: 0;
        color: #9ca3af;
    }
    .mirror-pitch li i {
        color: #facc15;
        margin-right: 0.5rem;
    }
    .mirror-preview img {
        width: 100%;
        border-radius: 16px;
        box-shadow: 0 25px 50px rgba(6, 182, 212, 0.2);
    }
    .services-section {
        background: #0f172a;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .service-card {
        transition: transform 0.3s ease, border-color 0.3s ease;
    }
    .service-card:hover {
        transform: scale(1.05);
        border-color: rgba(6, 182, 212, 0.4);
    }
    .service-icon {
        color: #22d3ee;
        font-size: 2rem;
        margin-bottom: 1rem;
    }
    .service-description {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .service-meta {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .service-price {
        font-size: 1.5rem;
        font-weight: 700;
        color: #facc15;
    }
    .service-duration {
        color: #6b7280;
        font-size: 0.875rem;
    }
    .gallery-section {
        background: linear-gradient(180deg, #0f172a, #000);
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .gallery-tile {
        position: relative;
        overflow: hidden;
        border-radius: 16px;
    }
    .gallery-tile img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        display: block;
        transition: transform 0.5s ease;
    }
    .gallery-tile:hover img {
        transform: scale(1.1);
    }
    .gallery-caption {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 1rem;
        background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), transparent);
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .gallery-tile:hover .gallery-caption {
        opacity: 1;
    }
    .gallery-caption h3 {
        margin: 0;
    }
    .gallery-caption p {
        margin: 0;
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .testimonials-section {
        background: #000;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .testimonial-header {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: linear-gradient(90deg, #22d3ee, #60a5fa);
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        font-size: 1.125rem;
    }
    .testimonial-header h4 {
        margin: 0;
    }
    .stars i {
        color: #facc15;
        font-size: 0.9rem;
    }
    .testimonial blockquote {
        margin: 0;
        color: #d1d5db;
        font-style: italic;
    }
    .contact-section {
        background: linear-gradient(180deg, #000, #0f172a);
    }
    .contact-grid {
        align-items: start;
    }
    .contact-cards {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .contact-card h3 i {
        color: #22d3ee;
    }
    .contact-card p {
        color: #d1d5db;
    }
    .booking-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .booking-form input, .booking-form select, .booking-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(6, 182, 212, 0.3);
        border-radius: 8px;
        color: #fff;
        resize: none;
    }
    .booking-form input:focus, .booking-form select:focus, .booking-form textarea:focus {
        border-color: #06b6d4;
        outline: none;
    }
    .landing-footer {
        background: #000;
        padding: 3rem 1rem;
        border-top: 1px solid rgba(6, 182, 212, 0.2);
        text-align: center;
        color: #9ca3af;
    }
    .landing-footer .brand {
        font-size: 1.875rem;
        font-weight: 700;
        margin-bottom: 1rem;
        background: linear-gradient(90deg, #22d3ee, #facc15);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .footer-badges {
        display: flex;
        justify-content: center;
        gap: 2rem;
        flex-wrap: wrap;
    }
    .footer-badges i {
        color: #22d3ee;
    }
    @media (max-width: 1024px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .gallery-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 3rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
        }
        .section-heading h2 {
            font-size: 2.25rem;
        }
        .mirror-grid, .contact-grid, .services-grid, .gallery-grid, .testimonials-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </div>
    }
}
