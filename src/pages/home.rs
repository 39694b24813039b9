use yew::prelude::*;

use crate::components::reveal_block::{RevealBlock, RevealScope};
use crate::components::whatsapp_fab::WhatsAppFab;
use crate::config;

fn scale_glyph(class: &'static str) -> Html {
    html! {
        <svg
            class={class}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="m16 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z" />
            <path d="m2 16 3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1Z" />
            <path d="M7 21h10" />
            <path d="M12 3v18" />
            <path d="M3 7h2c2 0 5-1 7-2 2 1 5 2 7 2h2" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct PillProps {
    #[prop_or_default]
    filled: bool,
    children: Children,
}

#[function_component(Pill)]
fn pill(props: &PillProps) -> Html {
    html! {
        <span class={classes!("pill", props.filled.then_some("pill-filled"))}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct ArrowLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

#[function_component(ArrowLink)]
fn arrow_link(props: &ArrowLinkProps) -> Html {
    html! {
        <a href={props.href.clone()} class={classes!("arrow-link", props.class.clone())}>
            <span class="arrow-link-circle">{"→"}</span>
            <span>{ for props.children.iter() }</span>
        </a>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let whatsapp = config::whatsapp_url();
    html! {
        <section class="hero">
            <div class="hero-bg">
                <img
                    src="https://picsum.photos/seed/law-hero/1920/1080?blur=2"
                    alt="Plano de fundo"
                    referrerpolicy="no-referrer"
                />
                <div class="hero-bg-fade"></div>
            </div>

            <div class="hero-content">
                { scale_glyph("hero-scale") }
                <RevealBlock id="hero-title">
                    <h1>
                        {"Justiça Além do "}
                        <br />
                        <span class="accent italic">{"Convencional."}</span>
                    </h1>
                </RevealBlock>

                <div class="hero-pills">
                    <span class="hero-pills-label">{"Explorar"}</span>
                    <a href={whatsapp.clone()}><Pill>{"Divórcio"}</Pill></a>
                    <a href={whatsapp.clone()}><Pill>{"Dívidas Bancárias"}</Pill></a>
                    <a href={whatsapp}><Pill>{"Direito do Trabalho"}</Pill></a>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <div class="hero-scroll-capsule">{"↓"}</div>
            </div>
        </section>
    }
}

#[function_component(Intro)]
fn intro() -> Html {
    html! {
        <section id="problemas" class="intro-section">
            <div class="site-grid">
                <div class="intro-label">
                    <RevealBlock id="intro-label">
                        <p class="section-label">
                            <span class="muted">{"Visão Geral"}</span>
                            <span>{"Inovação Jurídica"}</span>
                        </p>
                    </RevealBlock>
                </div>

                <div class="intro-copy">
                    <p class="lead">
                        {"Somos o primeiro escritório a aplicar "}
                        <span class="accent">{"Estratégia de Dados"}</span>
                        {" e IA para acelerar a resolução de conflitos e garantir seus direitos."}
                    </p>
                    <ArrowLink href={config::whatsapp_url()}>{"Análise de Caso Gratuita"}</ArrowLink>
                </div>
            </div>
        </section>
    }
}

const OFFICE_ITEMS: &[(&str, &str, &str)] = &[
    ("0.1", "Nossa Missão", "Justiça rápida através de tecnologia e humanização."),
    ("0.2", "Nossa Visão", "Liderar a transformação digital do direito brasileiro."),
    ("0.3", "Nossa Ambição", "Simplificar o acesso jurídico para todos os cidadãos."),
];

#[function_component(Office)]
fn office() -> Html {
    html! {
        <section class="office-section">
            <div class="site-grid">
                <div class="office-label">
                    <RevealBlock id="office-label">
                        <p class="section-label">
                            <span class="muted">{"Nosso Escritório"}</span>
                            <span class="accent">{"Excelência em Resultados"}</span>
                        </p>
                    </RevealBlock>
                </div>

                <div class="office-items">
                    {
                        OFFICE_ITEMS.iter().map(|&(num, title, desc)| html! {
                            <div key={num} class="office-item">
                                <div class="office-item-num">{num}</div>
                                <div class="office-item-body">
                                    <h3>{title}</h3>
                                    <p>{desc}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Approach)]
fn approach() -> Html {
    let whatsapp = config::whatsapp_url();
    html! {
        <section id="quem-somos" class="approach-section">
            <div class="approach-intro">
                <div class="approach-mark">{ scale_glyph("approach-mark-icon") }</div>
                <span class="approach-kicker">{"Conheça Nossa"}</span>
            </div>

            <RevealBlock id="approach-title" class="approach-title">
                <h2>
                    {"Abordagem "}
                    <br />
                    {"Resolutiva."}
                </h2>
            </RevealBlock>

            <div class="approach-showcase">
                <RevealBlock id="approach-photo" class="photo-card tilt">
                    <img
                        src="https://picsum.photos/seed/legal-tech/1200/800"
                        alt="Tecnologia jurídica"
                        referrerpolicy="no-referrer"
                    />
                    <div class="photo-card-tint"></div>
                </RevealBlock>

                <RevealBlock id="approach-stats" class="stats-card drift" delay_ms={200}>
                    <p class="stats-card-title">{"Estatísticas"}</p>
                    <div class="stats-card-row">
                        <span class="muted">{"Sucesso"}</span>
                        <span class="stats-card-value">{"94%"}</span>
                    </div>
                    <div class="stats-card-row">
                        <span class="muted">{"Agilidade"}</span>
                        <span class="stats-card-value">{"2x+"}</span>
                    </div>
                </RevealBlock>
            </div>

            <div class="approach-outro">
                <p>
                    {"Estamos em uma nova fase do direito, onde a tecnologia serve ao humano \
                      para garantir resoluções em tempo recorde."}
                </p>
                <div class="approach-ctas">
                    <a href={whatsapp.clone()}><Pill filled={true}>{"Falar no WhatsApp"}</Pill></a>
                    <a href={whatsapp}><Pill>{"Ver Casos de Sucesso"}</Pill></a>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="avaliacoes" class="about-section">
            <div class="about-row">
                <h2 class="section-label muted">{"Nosso Progresso"}</h2>
                <div class="about-row-head">
                    <RevealBlock id="about-method">
                        <h3>{"O Novo Método Jurídico"}</h3>
                    </RevealBlock>
                    <ArrowLink href={config::whatsapp_url()} class="on-dark">{"Ver Atualizações"}</ArrowLink>
                </div>
                <div class="about-row-body">
                    <h4>{"Onde o futuro é digital"}</h4>
                    <p>
                        {"Na intersecção entre inovação e estratégia, redefinimos a experiência \
                          jurídica com tecnologias de ponta. Desbloqueamos novas dimensões de \
                          agilidade para o seu caso."}
                    </p>
                    <p>
                        {"Através de avanços em análise preditiva e automação inteligente, \
                          elevamos suas chances de sucesso. Transformamos dados em força \
                          jurídica, simplificando processos complexos."}
                    </p>
                    <div class="about-note">
                        <span class="accent">{"*"}</span>
                        <p>{"Comprometidos com a defesa dos seus direitos na era da inteligência."}</p>
                    </div>
                </div>
            </div>

            <div class="about-row">
                <h2 class="section-label muted">{"Nosso Objetivo"}</h2>
                <div class="about-row-head">
                    <RevealBlock id="about-impact">
                        <h3>{"Impacto Radical na sua Vida"}</h3>
                    </RevealBlock>
                    <ArrowLink href={config::whatsapp_url()} class="on-dark">{"Nossos Programas"}</ArrowLink>
                </div>
                <div class="about-row-body">
                    <h4>{"O futuro está em nossas mãos"}</h4>
                    <p>
                        {"Nosso objetivo é criar soluções jurídicas avançadas que se integrem \
                          perfeitamente às necessidades reais das pessoas, garantindo \
                          estabilidade e segurança."}
                    </p>
                    <p>
                        {"Sempre mantemos nossos clientes no centro de tudo, priorizando a \
                          segurança, acessibilidade e confiabilidade em todo o nosso processo \
                          estratégico."}
                    </p>
                    <div class="about-note">
                        <span class="accent">{"*"}</span>
                        <p>{"Visualizando o futuro com uma abordagem pró-humana."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section id="contato" class="cta-section">
            <div class="cta-version">{"1.0"}</div>
            <RevealBlock id="cta-title">
                <h2>{"Evidência Jurídica"}</h2>
            </RevealBlock>
            <p>{"Estratégias e resultados, movidos por dados."}</p>
            <a href={config::whatsapp_url()} class="cta-button">
                <span class="cta-button-capsule">{"↓"}</span>
                <span class="cta-button-label">{"Falar com Especialista"}</span>
            </a>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="site-grid">
                <div class="footer-mark">{ scale_glyph("footer-scale") }</div>

                <div class="footer-body">
                    <div class="footer-columns">
                        <div class="footer-column">
                            <p class="section-label muted">{"1.0 Páginas"}</p>
                            <a href="#problemas">{"Problemas"}</a>
                            <a href="#quem-somos">{"Quem Somos"}</a>
                            <a href="#avaliacoes">{"Avaliações"}</a>
                        </div>
                        <div class="footer-column">
                            <p class="section-label muted">{"2.0 Siga"}</p>
                            <a href="#">{"LinkedIn"}</a>
                            <a href="#">{"Instagram"}</a>
                        </div>
                    </div>

                    <div class="footer-legal">
                        <div class="footer-legal-links">
                            <a href="#">{"Privacidade"}</a>
                            <a href="#">{"Termos"}</a>
                            <a href="#">{"Cookies"}</a>
                        </div>
                        <p>{"Brasil • OAB/SP 000.000"}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scope = use_state(RevealScope::new);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<RevealScope> context={(*scope).clone()}>
            <div class="home-page">
                <WhatsAppFab />

                <main>
                    <Hero />
                    <Intro />
                    <Office />
                    <Approach />
                    <About />
                    <FinalCta />
                </main>

                <Footer />

                <style>
                    {r#"
                    .home-page {
                        --off-white: #f5f4f0;
                        --off-black: #141414;
                        --grey-light: #eceae4;
                        --blue: #2441e7;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        background: var(--off-white);
                        color: var(--off-black);
                        font-weight: 300;
                    }

                    .home-page ::selection {
                        background: var(--blue);
                        color: #fff;
                    }

                    .home-page a {
                        color: inherit;
                        text-decoration: none;
                    }

                    .home-page .accent {
                        color: var(--blue);
                    }

                    .home-page .italic {
                        font-style: italic;
                    }

                    .home-page .muted {
                        opacity: 0.35;
                    }

                    .site-grid {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 2rem;
                        padding: 0 5.13vw;
                    }

                    .section-label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        display: flex;
                        flex-direction: column;
                        gap: 0.25rem;
                    }

                    /* One-shot entrance transitions. Blocks start shifted and
                       transparent; .played applies the final pose. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition:
                            opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1),
                            transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }

                    .reveal.tilt {
                        transform: rotate(-5deg) scale(0.9);
                    }

                    .reveal.drift {
                        transform: translate(50px, 50px);
                    }

                    .reveal.played {
                        opacity: 1;
                        transform: none;
                    }

                    .pill {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.6rem 1.4rem;
                        border: 1px solid currentColor;
                        border-radius: 999px;
                        font-size: 0.95rem;
                        color: var(--blue);
                        transition: all 0.3s ease;
                    }

                    .pill:hover {
                        background: var(--blue);
                        color: #fff;
                    }

                    .pill-filled {
                        background: var(--blue);
                        border-color: var(--blue);
                        color: #fff;
                    }

                    .pill-filled:hover {
                        background: transparent;
                        color: var(--blue);
                    }

                    .arrow-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 1.3rem;
                        letter-spacing: -0.01em;
                        color: var(--blue);
                    }

                    .arrow-link-circle {
                        width: 2.5rem;
                        height: 1.5rem;
                        border: 1px solid currentColor;
                        border-radius: 999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.85rem;
                        transition: transform 0.3s ease;
                    }

                    .arrow-link:hover .arrow-link-circle {
                        transform: translateX(4px);
                    }

                    .arrow-link.on-dark {
                        color: #fff;
                    }

                    /* Hero */

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 0 5.13vw 5rem;
                        position: relative;
                        overflow: hidden;
                    }

                    .hero-bg {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .hero-bg img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.1;
                    }

                    .hero-bg-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--off-white), transparent 50%);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 56rem;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }

                    .hero-scale {
                        width: 60px;
                        height: 60px;
                        color: var(--blue);
                        opacity: 0.2;
                    }

                    .hero h1 {
                        font-size: clamp(3.5rem, 9vw, 8rem);
                        font-weight: 300;
                        letter-spacing: -0.04em;
                        line-height: 1.02;
                        margin: 0;
                    }

                    .hero-pills {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 1rem;
                    }

                    .hero-pills-label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        opacity: 0.5;
                        margin-right: 1rem;
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        right: 5.13vw;
                    }

                    .hero-scroll-capsule {
                        animation: hint-bounce 2s ease-in-out infinite;
                        width: 2.5rem;
                        height: 4rem;
                        border: 1px solid rgba(0, 0, 0, 0.1);
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.85rem;
                        opacity: 0.4;
                    }

                    @keyframes hint-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }

                    /* Intro */

                    .intro-section {
                        padding: 8rem 0;
                        background: var(--grey-light);
                    }

                    .intro-label {
                        grid-column: span 1;
                    }

                    .intro-copy {
                        grid-column: 3 / span 2;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }

                    .lead {
                        font-size: clamp(1.8rem, 3.4vw, 3rem);
                        letter-spacing: -0.02em;
                        line-height: 1.25;
                        margin: 0;
                    }

                    /* Office */

                    .office-section {
                        padding: 8rem 0;
                        background: var(--off-black);
                        color: var(--off-white);
                    }

                    .office-label {
                        grid-column: 3 / span 2;
                        margin-bottom: 4rem;
                    }

                    .office-items {
                        grid-column: 2 / span 4;
                        display: grid;
                        gap: 3rem;
                    }

                    .office-item {
                        display: grid;
                        grid-template-columns: 1fr 3fr;
                        gap: 2rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding-bottom: 3rem;
                    }

                    .office-item:last-child {
                        border-bottom: none;
                    }

                    .office-item-num {
                        font-family: monospace;
                        font-size: 0.75rem;
                        opacity: 0.3;
                    }

                    .office-item-body h3 {
                        font-size: 2.2rem;
                        font-weight: 300;
                        letter-spacing: -0.02em;
                        margin: 0 0 1rem;
                    }

                    .office-item-body p {
                        font-size: 1.1rem;
                        opacity: 0.5;
                        max-width: 28rem;
                        margin: 0;
                    }

                    /* Approach */

                    .approach-section {
                        padding: 8rem 5.13vw;
                        background: var(--off-white);
                        overflow: hidden;
                        text-align: center;
                    }

                    .approach-intro {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }

                    .approach-mark {
                        width: 3rem;
                        height: 3rem;
                        background: var(--off-black);
                        border-radius: 4px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .approach-mark-icon {
                        width: 20px;
                        height: 20px;
                        color: #fff;
                    }

                    .approach-kicker {
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        opacity: 0.5;
                    }

                    .approach-title h2 {
                        font-size: clamp(4rem, 10vw, 10rem);
                        font-weight: 300;
                        letter-spacing: -0.04em;
                        line-height: 0.95;
                        color: var(--blue);
                        margin: 3rem 0 0;
                    }

                    .approach-showcase {
                        position: relative;
                        max-width: 56rem;
                        height: min(600px, 60vw);
                        margin: 5rem auto 0;
                    }

                    .photo-card {
                        position: absolute;
                        inset: 0;
                        border-radius: 3rem;
                        overflow: hidden;
                        box-shadow: 0 32px 64px rgba(0, 0, 0, 0.25);
                        z-index: 1;
                    }

                    .photo-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .photo-card-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(36, 65, 231, 0.1);
                        mix-blend-mode: multiply;
                    }

                    .stats-card {
                        position: absolute;
                        bottom: -2.5rem;
                        right: -2.5rem;
                        width: 16rem;
                        background: #fff;
                        padding: 2rem;
                        border-radius: 2rem;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.15);
                        z-index: 2;
                        text-align: left;
                    }

                    .stats-card-title {
                        font-size: 0.85rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        margin: 0 0 1rem;
                    }

                    .stats-card-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                        padding: 0.5rem 0;
                        font-size: 0.8rem;
                    }

                    .stats-card-value {
                        font-size: 1.5rem;
                        font-weight: 300;
                        color: var(--blue);
                    }

                    .approach-outro {
                        max-width: 36rem;
                        margin: 6rem auto 0;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }

                    .approach-outro p {
                        font-size: 1.35rem;
                        letter-spacing: -0.01em;
                        opacity: 0.6;
                        margin: 0;
                    }

                    .approach-ctas {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    /* About */

                    .about-section {
                        padding: 8rem 5.13vw;
                        background: var(--off-black);
                        color: var(--off-white);
                    }

                    .about-row {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr 2fr;
                        gap: 3rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding-bottom: 6rem;
                        margin-bottom: 6rem;
                    }

                    .about-row:last-child {
                        border-bottom: none;
                        padding-bottom: 0;
                        margin-bottom: 0;
                    }

                    .about-row-head {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .about-row-head h3 {
                        font-size: 2.2rem;
                        font-weight: 300;
                        letter-spacing: -0.02em;
                        line-height: 1.15;
                        margin: 0;
                    }

                    .about-row-body {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        font-size: 1.1rem;
                        opacity: 0.85;
                    }

                    .about-row-body h4 {
                        font-size: 1.1rem;
                        font-weight: 500;
                        margin: 0;
                    }

                    .about-row-body p {
                        opacity: 0.5;
                        line-height: 1.6;
                        margin: 0;
                    }

                    .about-note {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding-top: 1.5rem;
                    }

                    .about-note .accent {
                        font-size: 1.5rem;
                    }

                    .about-note p {
                        font-size: 0.9rem;
                        font-style: italic;
                    }

                    /* Final CTA */

                    .cta-section {
                        padding: 12rem 5.13vw;
                        background: var(--blue);
                        color: #fff;
                        text-align: center;
                    }

                    .cta-version {
                        font-family: monospace;
                        font-size: 0.75rem;
                        opacity: 0.5;
                        margin-bottom: 3rem;
                    }

                    .cta-section h2 {
                        font-size: clamp(3.5rem, 8vw, 7rem);
                        font-weight: 300;
                        letter-spacing: -0.04em;
                        margin: 0;
                    }

                    .cta-section > p {
                        font-size: 1.4rem;
                        opacity: 0.7;
                        max-width: 26rem;
                        margin: 2rem auto 0;
                    }

                    .cta-button {
                        display: inline-flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .cta-button-capsule {
                        width: 4rem;
                        height: 6rem;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: all 0.3s ease;
                    }

                    .cta-button:hover .cta-button-capsule {
                        background: #fff;
                        color: var(--blue);
                    }

                    .cta-button-label {
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }

                    /* Footer */

                    .site-footer {
                        padding: 8rem 0;
                        background: var(--off-black);
                        color: var(--off-white);
                    }

                    .footer-mark {
                        grid-column: span 1;
                    }

                    .footer-scale {
                        width: 40px;
                        height: 40px;
                        color: #fff;
                    }

                    .footer-body {
                        grid-column: 4 / span 2;
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                    }

                    .footer-columns {
                        display: flex;
                        gap: 3rem;
                    }

                    .footer-column {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        font-size: 1.4rem;
                    }

                    .footer-column a {
                        transition: color 0.3s ease;
                    }

                    .footer-column a:hover {
                        color: var(--blue);
                    }

                    .footer-legal {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 4rem;
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 2rem;
                        font-size: 0.75rem;
                        opacity: 0.3;
                    }

                    .footer-legal-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-legal p {
                        margin: 0;
                    }

                    @media (max-width: 768px) {
                        .site-grid {
                            grid-template-columns: 1fr;
                        }

                        .intro-copy,
                        .office-label,
                        .office-items,
                        .footer-body {
                            grid-column: 1;
                        }

                        .office-item {
                            grid-template-columns: 1fr;
                            gap: 0.75rem;
                        }

                        .about-row {
                            grid-template-columns: 1fr;
                            padding-bottom: 4rem;
                            margin-bottom: 4rem;
                        }

                        .stats-card {
                            display: none;
                        }

                        .hero-scroll-hint {
                            left: 50%;
                            right: auto;
                            transform: translateX(-50%);
                        }
                    }
                    "#}
                </style>
            </div>
        </ContextProvider<RevealScope>>
    }
}
