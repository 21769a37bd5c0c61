use crate::mirror::image::UploadedImage;

#[derive(Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub style: &'static str,
    pub rationale: &'static str,
    pub detail: &'static str,
    pub match_image: &'static str,
    pub alternatives_image: &'static str,
}

pub const RECOMMENDATION: Recommendation = Recommendation {
    style: "Textured French Crop with High Fade",
    rationale: "Based on your oval face shape and hair texture, we recommend:",
    detail: "Perfect for your facial proportions and will add definition to your features.",
    match_image: "mens-textured-french-crop-skin-fade-hairstyle.jpg",
    alternatives_image: "mens-trendy-hairstyles-fade-crop-collage.jpg",
};

// The photo is never looked at.
pub fn recommendation_for(_image: &UploadedImage) -> &'static Recommendation {
    &RECOMMENDATION
}
