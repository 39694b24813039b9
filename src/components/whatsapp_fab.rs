use yew::prelude::*;

use crate::config;

/// Floating WhatsApp button, fixed to the lower-right corner of every
/// viewport. Pure presentation: the link target is the build-time contact
/// URL and the entrance/pulse animations are CSS keyframes.
#[function_component(WhatsAppFab)]
pub fn whatsapp_fab() -> Html {
    html! {
        <>
            <a
                class="whatsapp-fab"
                href={config::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Falar no WhatsApp"
            >
                <span class="whatsapp-fab-badge">{"Resposta rápida"}</span>
                <svg
                    viewBox="0 0 24 24"
                    width="30"
                    height="30"
                    fill="currentColor"
                    stroke="none"
                    aria-hidden="true"
                >
                    <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
                </svg>
            </a>
            <style>
                {r#"
                .whatsapp-fab {
                    position: fixed;
                    bottom: 2.5rem;
                    right: 2.5rem;
                    z-index: 50;
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: #25d366;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                    animation: fab-enter 0.6s cubic-bezier(0.16, 1, 0.3, 1) both;
                }

                .whatsapp-fab:hover {
                    transform: scale(1.1);
                }

                .whatsapp-fab-badge {
                    position: absolute;
                    top: -1rem;
                    left: -3.5rem;
                    background: #e63946;
                    color: #fff;
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    white-space: nowrap;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
                    animation: fab-pulse 2s ease-in-out infinite;
                }

                @keyframes fab-enter {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes fab-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.55; }
                }

                @media (max-width: 768px) {
                    .whatsapp-fab {
                        bottom: 1.5rem;
                        right: 1.5rem;
                        width: 4rem;
                        height: 4rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
