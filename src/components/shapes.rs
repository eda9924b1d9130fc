use yew::prelude::*;

/// Decorative blurred blobs drifting behind the hero. Pure CSS, no state.
#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    html! {
        <div class="floating-shapes" aria-hidden="true">
            <style>
                {r#"
                    .floating-shapes {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .shape {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(60px);
                        opacity: 0.35;
                    }
                    .shape-one {
                        width: 320px;
                        height: 320px;
                        top: -80px;
                        left: -60px;
                        background: rgba(30, 144, 255, 0.5);
                        animation: drift-one 14s ease-in-out infinite;
                    }
                    .shape-two {
                        width: 260px;
                        height: 260px;
                        bottom: -40px;
                        right: 10%;
                        background: rgba(126, 178, 255, 0.4);
                        animation: drift-two 18s ease-in-out infinite;
                    }
                    .shape-three {
                        width: 180px;
                        height: 180px;
                        top: 30%;
                        right: -50px;
                        background: rgba(157, 123, 255, 0.35);
                        animation: drift-one 11s ease-in-out infinite reverse;
                    }
                    @keyframes drift-one {
                        0%   { transform: translate(0, 0) scale(1); }
                        50%  { transform: translate(40px, 30px) scale(1.1); }
                        100% { transform: translate(0, 0) scale(1); }
                    }
                    @keyframes drift-two {
                        0%   { transform: translate(0, 0); }
                        50%  { transform: translate(-50px, -20px); }
                        100% { transform: translate(0, 0); }
                    }
                "#}
            </style>
            <div class="shape shape-one"></div>
            <div class="shape shape-two"></div>
            <div class="shape shape-three"></div>
        </div>
    }
}
