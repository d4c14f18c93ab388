// src/registry/catalog.rs
// =============================================================================
// The static catalog of gallery examples.
//
// Declared once and turned into a Registry at process start. Order here is
// the order examples are listed in.
// =============================================================================

use super::entry::{Category, ExampleEntry};
use super::scene::RenderUnit;

/// (category, entries) pairs for every built-in example
pub(super) fn builtin_examples() -> Vec<(Category, Vec<ExampleEntry>)> {
    vec![
        (Category::ThreeJs, threejs_examples()),
        (Category::Gsap, gsap_examples()),
        (Category::FramerMotion, framer_motion_examples()),
    ]
}

fn threejs_examples() -> Vec<ExampleEntry> {
    vec![
        ExampleEntry::new(
            "basic-setup",
            "1. Basic Setup",
            RenderUnit::BasicSetup,
            "This example demonstrates how to set up a basic Three.js scene using React Three Fiber.",
        )
        .with_doc_path("/docs/threejs/basic-setup.md"),
        ExampleEntry::new(
            "camera-types",
            "2. Camera Types",
            RenderUnit::CameraTypes,
            "This example showcases the different camera types available in Three.js.",
        )
        .with_doc_path("/docs/threejs/camera-types.md"),
        ExampleEntry::new(
            "geometry-types",
            "3. Geometry Types",
            RenderUnit::GeometryTypes,
            "This example displays various geometry primitives available in Three.js.",
        )
        .with_doc_path("/docs/threejs/geometry-types.md"),
        ExampleEntry::new(
            "lighting-types",
            "4. Lighting Types",
            RenderUnit::LightingTypes,
            "This example demonstrates different lighting types in Three.js.",
        )
        .with_doc_path("/docs/threejs/lighting-types.md"),
        ExampleEntry::new(
            "custom-geometry",
            "5. Custom Geometry",
            RenderUnit::CustomGeometry,
            "This example shows how to create custom geometries in Three.js.",
        )
        .with_doc_path("/docs/threejs/custom-geometry.md"),
        ExampleEntry::new(
            "animation-interactivity",
            "6. Animation & Interactivity",
            RenderUnit::AnimationInteractivity,
            "This example demonstrates animation and interactivity in Three.js.",
        )
        .with_doc_path("/docs/threejs/animation-interactivity.md"),
        ExampleEntry::new(
            "performance-optimization",
            "7. Performance Optimization",
            RenderUnit::PerformanceOptimization,
            "This example covers techniques for optimizing Three.js applications.",
        )
        .with_doc_path("/docs/threejs/performance-optimization.md"),
    ]
}

fn gsap_examples() -> Vec<ExampleEntry> {
    vec![
        ExampleEntry::new(
            "animation",
            "Basic Animation",
            RenderUnit::GsapAnimation,
            "This example demonstrates basic GSAP animations in React.",
        )
        .with_doc_path("/docs/gsap/animation.md"),
        ExampleEntry::new(
            "scroll",
            "Scroll Animations",
            RenderUnit::GsapScroll,
            "This example demonstrates scroll-based animations with GSAP ScrollTrigger.",
        )
        .with_doc_path("/docs/gsap/scroll.md"),
        ExampleEntry::new(
            "text-animation",
            "Text Animation",
            RenderUnit::GsapTextAnimation,
            "This example showcases text animation techniques with GSAP.",
        )
        .with_doc_path("/docs/gsap/text-animation.md"),
        ExampleEntry::new(
            "svg-animation",
            "SVG Animation",
            RenderUnit::GsapSvgAnimation,
            "This example demonstrates SVG animation techniques with GSAP.",
        )
        .with_doc_path("/docs/gsap/svg-animation.md"),
        ExampleEntry::new(
            "interactive-animations",
            "Interactive Animations",
            RenderUnit::GsapInteractiveAnimations,
            "This example shows how to create interactive animations with GSAP.",
        )
        .with_doc_path("/docs/gsap/interactive-animations.md"),
    ]
}

// Framer Motion examples have no Markdown docs; the explanation is all the
// docs panel ever shows for them.
fn framer_motion_examples() -> Vec<ExampleEntry> {
    vec![
        ExampleEntry::new(
            "basic-animations",
            "Basic Animations",
            RenderUnit::MotionBasicAnimations,
            "This example demonstrates the basics of Framer Motion animations:\n\n\
             - Using the motion component for simple animations\n\
             - Defining initial, animate, and exit states\n\
             - Working with transition properties\n\
             - Using variants for coordinated animations\n\
             - Creating keyframes animations\n\n\
             Framer Motion provides a simple, declarative API for creating \
             animations in React applications with minimal code.",
        ),
        ExampleEntry::new(
            "gesture-animations",
            "Gesture Animations",
            RenderUnit::MotionGestureAnimations,
            "This example showcases gesture-based animations in Framer Motion:\n\n\
             - Creating hover animations with whileHover\n\
             - Implementing tap effects with whileTap\n\
             - Using drag functionality with constraints\n\
             - Handling focus states with whileFocus\n\
             - Combining gestures for rich interactions\n\n\
             Framer Motion's gesture support makes it easy to create interactive \
             elements that respond naturally to user input.",
        ),
        ExampleEntry::new(
            "layout-animations",
            "Layout Animations",
            RenderUnit::MotionLayoutAnimations,
            "This example demonstrates layout animations with Framer Motion:\n\n\
             - Using the layout prop for automatic layout animations\n\
             - Creating shared layout animations with layoutId\n\
             - Implementing AnimatePresence for mount/unmount animations\n\
             - Working with list reordering animations\n\
             - Creating complex layout transitions\n\n\
             Framer Motion's layout animation system makes it simple to create \
             smooth transitions when your UI's layout changes.",
        ),
        ExampleEntry::new(
            "scroll-animations",
            "Scroll Animations",
            RenderUnit::MotionScrollAnimations,
            "This example shows scroll-based animations in Framer Motion:\n\n\
             - Using useScroll hook to create scroll-linked animations\n\
             - Implementing scroll-triggered animations\n\
             - Creating parallax effects\n\
             - Building scroll progress indicators\n\
             - Orchestrating complex scroll-based sequences\n\n\
             Framer Motion provides tools to create engaging scroll experiences \
             that bring your content to life as users explore your page.",
        ),
        ExampleEntry::new(
            "svg-animations",
            "SVG Animations",
            RenderUnit::MotionSvgAnimations,
            "This example demonstrates SVG animations with Framer Motion:\n\n\
             - Animating SVG paths with motion.path\n\
             - Creating path drawing animations\n\
             - Implementing path morphing between different shapes\n\
             - Animating SVG properties and attributes\n\
             - Combining SVG animations with gestures\n\n\
             Framer Motion makes it easy to bring SVG illustrations to life \
             with smooth, performant animations.",
        ),
        ExampleEntry::new(
            "advanced-animations",
            "Advanced Animations",
            RenderUnit::MotionAdvancedAnimations,
            "This example showcases advanced animation techniques with Framer Motion:\n\n\
             - Using MotionValues for fine-grained control\n\
             - Creating custom animation controls\n\
             - Implementing physics-based animations\n\
             - Building animation sequences with useCycle\n\
             - Optimizing animations for performance\n\n\
             These advanced techniques allow for complex, nuanced animations \
             that can bring your UI to the next level.",
        ),
    ]
}
