use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use crate::config;
use crate::mirror::{read_selected_file, recommendation_for, MirrorError, MirrorState, OpenGeneration, UploadedImage};

#[derive(Properties, PartialEq)]
pub struct MirrorModalProps {
    pub state: MirrorState,
    pub generation: OpenGeneration,
    pub on_close: Callback<MouseEvent>,
    pub on_photo: Callback<(OpenGeneration, Result<UploadedImage, MirrorError>)>,
    pub on_book: Callback<MouseEvent>,
}

#[function_component(MirrorModal)]
pub fn mirror_modal(props: &MirrorModalProps) -> Html {
    let file_input = use_node_ref();

    let on_choose = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_change = {
        let on_photo = props.on_photo.clone();
        let generation = props.generation;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let on_photo = on_photo.clone();
            spawn_local(async move {
                let result = read_selected_file(&input).await;
                // Let the same file be picked again later
                input.set_value("");
                on_photo.emit((generation, result));
            });
        })
    };

    let state = &props.state;
    if !state.is_open() {
        return html! {};
    }

    let body = match state.image() {
        None => html! {
            <div class="mirror-upload">
                <div class="mirror-dropzone">
                    <i class="fas fa-camera mirror-dropzone-icon"></i>
                    <p>{"Upload your photo to see your perfect hairstyle"}</p>
                    <input
                        ref={file_input}
                        type="file"
                        accept="image/*"
                        class="mirror-file-input"
                        onchange={on_change}
                    />
                    <button class="mirror-btn primary" onclick={on_choose}>
                        {"Choose Photo"}
                    </button>
                </div>
                {
                    if let Some(notice) = state.notice() {
                        html! { <p class="mirror-notice">{notice.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="mirror-privacy">
                    {"Your photo is processed locally and never stored on our servers"}
                </p>
            </div>
        },
        Some(image) if state.shows_results() => {
            let rec = recommendation_for(image);
            html! {
                <div class="mirror-results">
                    <div class="mirror-recommendation">
                        <h4>{"AI Recommendation"}</h4>
                        <p>{rec.rationale}</p>
                        <p class="mirror-style">{rec.style}</p>
                        <p class="mirror-detail">{rec.detail}</p>
                    </div>
                    <div class="mirror-matches">
                        <div class="mirror-match">
                            <img src={config::asset_url(rec.match_image)} alt="Recommended Style" />
                            <p class="match-primary">{"Your Style Match"}</p>
                        </div>
                        <div class="mirror-match alt">
                            <img src={config::asset_url(rec.alternatives_image)} alt="Alternative Styles" />
                            <p class="match-alt">{"Alternative Options"}</p>
                        </div>
                    </div>
                    <button class="mirror-btn book" onclick={props.on_book.clone()}>
                        {"Book This Style"}
                    </button>
                </div>
            }
        }
        Some(image) => html! {
            <div class="mirror-scan">
                <img src={image.data_url().to_string()} alt="Scanning" />
                <div class="mirror-scan-frame"></div>
                <div class="mirror-scan-label">{"Scanning... Analyzing features"}</div>
            </div>
        },
    };

    html! {
        <div class="mirror-overlay">
            <div class="mirror-content" aria-busy={state.is_scanning().to_string()}>
                <div class="mirror-header">
                    <h3>{"Virtual Barber Mirror"}</h3>
                    <button class="mirror-close" aria-label="Close" onclick={props.on_close.clone()}>
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>
                {body}
            </div>
            <style>
                {r#"
                .mirror-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(4px);
                }
                .mirror-content {
                    background: linear-gradient(135deg, #0f172a, #000);
                    border: 1px solid rgba(6, 182, 212, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 42rem;
                    width: calc(100% - 2rem);
                    text-align: center;
                }
                .mirror-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .mirror-header h3 {
                    margin: 0;
                    font-size: 1.5rem;
                    color: #22d3ee;
                }
                .mirror-close {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .mirror-close:hover {
                    color: #fff;
                }
                .mirror-dropzone {
                    border: 2px dashed rgba(6, 182, 212, 0.5);
                    border-radius: 8px;
                    padding: 3rem;
                    margin-bottom: 1.5rem;
                    color: #d1d5db;
                }
                .mirror-dropzone-icon {
                    font-size: 4rem;
                    color: #22d3ee;
                    margin-bottom: 1rem;
                }
                .mirror-file-input {
                    display: none;
                }
                .mirror-notice {
                    color: #f87171;
                    margin-bottom: 1rem;
                }
                .mirror-privacy {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .mirror-btn {
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 600;
                    color: #fff;
                    cursor: pointer;
                    transition: filter 0.3s ease;
                }
                .mirror-btn:hover {
                    filter: brightness(0.9);
                }
                .mirror-btn.primary {
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                }
                .mirror-btn.book {
                    width: 100%;
                    background: linear-gradient(90deg, #eab308, #f97316);
                }
                .mirror-scan {
                    position: relative;
                    max-width: 24rem;
                    margin: 0 auto 1.5rem;
                }
                .mirror-scan img {
                    width: 100%;
                    border-radius: 8px;
                    display: block;
                }
                .mirror-scan-frame {
                    position: absolute;
                    inset: 0;
                    border: 2px solid #22d3ee;
                    border-radius: 8px;
                    animation: mirror-pulse 1.5s ease-in-out infinite;
                }
                .mirror-scan-label {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #22d3ee;
                    font-weight: 700;
                    font-size: 1.1rem;
                    animation: mirror-pulse 1.5s ease-in-out infinite;
                }
                @keyframes mirror-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                .mirror-results {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .mirror-recommendation {
                    background: linear-gradient(90deg, rgba(6, 182, 212, 0.2), rgba(59, 130, 246, 0.2));
                    border: 1px solid rgba(6, 182, 212, 0.3);
                    border-radius: 8px;
                    padding: 1.5rem;
                    color: #d1d5db;
                }
                .mirror-recommendation h4 {
                    margin: 0 0 1rem;
                    font-size: 1.25rem;
                    color: #22d3ee;
                }
                .mirror-style {
                    color: #facc15;
                    font-weight: 700;
                    font-size: 1.125rem;
                }
                .mirror-detail {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .mirror-matches {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .mirror-match {
                    background: rgba(30, 41, 59, 0.5);
                    border: 1px solid rgba(6, 182, 212, 0.2);
                    border-radius: 8px;
                    padding: 1rem;
                }
                .mirror-match.alt {
                    border-color: rgba(234, 179, 8, 0.2);
                }
                .mirror-match img {
                    width: 100%;
                    height: 8rem;
                    object-fit: cover;
                    border-radius: 4px;
                    margin-bottom: 0.5rem;
                }
                .mirror-match p {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .match-primary {
                    color: #22d3ee;
                }
                .match-alt {
                    color: #facc15;
                }
                "#}
            </style>
        </div>
    }
}
