// src/registry/scene.rs
// =============================================================================
// Renderable units: the interactive visual behind each example.
//
// The visuals themselves are client-side components owned by the animation
// libraries. On this side they are opaque: a closed enum over every known
// example, each variant mapped at compile time to the component module the
// browser lazily mounts, plus the loading placeholder shown meanwhile.
//
// Rust concepts:
// - Exhaustive match: adding a variant forces every mapping to be updated
// - Manual Serialize: the unit is written as a single "category/id" key
// =============================================================================

use serde::{Serialize, Serializer};

use super::entry::Category;

/// Every example visual the gallery knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderUnit {
    // Three.js
    BasicSetup,
    CameraTypes,
    GeometryTypes,
    LightingTypes,
    CustomGeometry,
    AnimationInteractivity,
    PerformanceOptimization,
    // GSAP
    GsapAnimation,
    GsapScroll,
    GsapTextAnimation,
    GsapSvgAnimation,
    GsapInteractiveAnimations,
    // Framer Motion
    MotionBasicAnimations,
    MotionGestureAnimations,
    MotionLayoutAnimations,
    MotionScrollAnimations,
    MotionSvgAnimations,
    MotionAdvancedAnimations,
}

impl RenderUnit {
    /// Category and id this unit belongs to
    pub fn key(self) -> (Category, &'static str) {
        use RenderUnit::*;
        match self {
            BasicSetup => (Category::ThreeJs, "basic-setup"),
            CameraTypes => (Category::ThreeJs, "camera-types"),
            GeometryTypes => (Category::ThreeJs, "geometry-types"),
            LightingTypes => (Category::ThreeJs, "lighting-types"),
            CustomGeometry => (Category::ThreeJs, "custom-geometry"),
            AnimationInteractivity => (Category::ThreeJs, "animation-interactivity"),
            PerformanceOptimization => (Category::ThreeJs, "performance-optimization"),
            GsapAnimation => (Category::Gsap, "animation"),
            GsapScroll => (Category::Gsap, "scroll"),
            GsapTextAnimation => (Category::Gsap, "text-animation"),
            GsapSvgAnimation => (Category::Gsap, "svg-animation"),
            GsapInteractiveAnimations => (Category::Gsap, "interactive-animations"),
            MotionBasicAnimations => (Category::FramerMotion, "basic-animations"),
            MotionGestureAnimations => (Category::FramerMotion, "gesture-animations"),
            MotionLayoutAnimations => (Category::FramerMotion, "layout-animations"),
            MotionScrollAnimations => (Category::FramerMotion, "scroll-animations"),
            MotionSvgAnimations => (Category::FramerMotion, "svg-animations"),
            MotionAdvancedAnimations => (Category::FramerMotion, "advanced-animations"),
        }
    }

    /// Client-side component module mounted for this unit
    pub fn component_module(self) -> &'static str {
        use RenderUnit::*;
        match self {
            BasicSetup => "components/1. ThreeJs/1.BasicSetup",
            CameraTypes => "components/1. ThreeJs/2.CameraTypes",
            GeometryTypes => "components/1. ThreeJs/3.GeometryTypes",
            LightingTypes => "components/1. ThreeJs/4.LightingTypes",
            CustomGeometry => "components/1. ThreeJs/5.CustomGeometry",
            AnimationInteractivity => "components/1. ThreeJs/6.AnimationAndInteractivity",
            PerformanceOptimization => "components/1. ThreeJs/7.PerformanceOptimization",
            GsapAnimation => "components/2. Gsap/1.Animation",
            GsapScroll => "components/2. Gsap/2.GsapScroll",
            GsapTextAnimation => "components/gsap/TextAnimation",
            GsapSvgAnimation => "components/gsap/SvgAnimation",
            GsapInteractiveAnimations => "components/gsap/InteractiveAnimations",
            MotionBasicAnimations => "components/3. FramerMotion/1.BasicAnimations",
            MotionGestureAnimations => "components/3. FramerMotion/2.GestureAnimations",
            MotionLayoutAnimations => "components/3. FramerMotion/3.LayoutAnimations",
            MotionScrollAnimations => "components/3. FramerMotion/4.ScrollAnimations",
            MotionSvgAnimations => "components/3. FramerMotion/5.SvgAnimations",
            MotionAdvancedAnimations => "components/3. FramerMotion/6.AdvancedAnimations",
        }
    }

    /// Mount point markup for the host page.
    ///
    /// The host lazily loads `data-module` and swaps out the spinner once the
    /// component is ready; unmounting removes the whole element.
    pub fn render(self) -> String {
        let (category, id) = self.key();
        format!(
            "<div class=\"example-mount\" id=\"example-{category}-{id}\" data-module=\"{module}\" data-lazy=\"true\">\n  \
             <div class=\"flex items-center justify-center h-screen\">\
             <div class=\"animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500\"></div>\
             </div>\n</div>",
            module = self.component_module(),
        )
    }
}

impl Serialize for RenderUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (category, id) = self.key();
        serializer.serialize_str(&format!("{}/{}", category, id))
    }
}
