//! Global CSS styles for Habit Gallery.
//!
//! Warm paper palette with a soft particle backdrop.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf7f2;
  --paper-card: #ffffff;
  --paper-border: #e6dfd3;

  /* INK (Text) */
  --ink: #2f2a24;
  --ink-secondary: rgba(47, 42, 36, 0.72);
  --ink-muted: rgba(47, 42, 36, 0.5);

  /* ACCENT */
  --sprout: #5c9a5c;
  --sprout-glow: rgba(92, 154, 92, 0.25);
  --sun: #e8a33d;

  /* SEMANTIC */
  --danger: #d64545;
  --success: #3f8f4f;
  --info: #4a78c2;

  /* Typography */
  --font-sans: 'Noto Sans TC', 'PingFang TC', 'Microsoft JhengHei', sans-serif;
  --font-icon: 'icomoon', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slide: 800ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
}

.app-root {
  outline: none;
}

.icon-font {
  font-family: var(--font-icon);
}

/* === Particles === */
.particles-background {
  position: fixed;
  inset: 0;
  z-index: -1;
}

/* === Init Error Banner === */
.init-error-banner {
  position: sticky;
  top: 0;
  z-index: 1100;
  padding: 0.75rem 1rem;
  background: var(--danger);
  color: #fff;
  text-align: center;
  font-size: var(--text-sm);
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 900;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(250, 247, 242, 0.92);
  border-bottom: 1px solid var(--paper-border);
  backdrop-filter: blur(6px);
}

.nav-title {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--ink);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link,
.mobile-menu-link {
  color: var(--ink-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.mobile-menu-link:hover {
  color: var(--sprout);
}

.mobile-menu-button {
  display: none;
  background: none;
  border: none;
  font-size: var(--text-xl);
  color: var(--ink);
  cursor: pointer;
}

.mobile-menu {
  display: none;
}

/* === Typography === */
.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.2;
}

.section-title {
  font-size: var(--text-2xl);
  margin-bottom: 1.5rem;
  text-align: center;
}

/* === Layout === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem 4rem;
}

section {
  padding-top: 4rem;
}

/* === Hero === */
.hero {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
  align-items: center;
  position: relative;
}

.hero-subtitle {
  margin: 1rem 0 2rem;
  color: var(--ink-secondary);
  font-size: var(--text-lg);
}

.hero-slideshow {
  position: relative;
  aspect-ratio: 4 / 3;
  border-radius: 12px;
  overflow: hidden;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
}

.slide {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity var(--transition-slide);
}

.slide.active {
  opacity: 1;
}

.slide img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.slideshow-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  color: var(--ink-muted);
}

.mascot {
  position: absolute;
  right: -1rem;
  bottom: -2rem;
  width: 80px;
  cursor: pointer;
}

.mascot img {
  width: 100%;
}

/* === Buttons === */
.btn-primary {
  display: inline-block;
  padding: 0.75rem 2rem;
  background: var(--sprout);
  border: none;
  border-radius: 999px;
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  text-decoration: none;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary:hover {
  box-shadow: 0 0 20px var(--sprout-glow);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.gallery-card {
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 10px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.gallery-card:hover,
.gallery-card:focus {
  transform: translateY(-3px);
  box-shadow: 0 6px 20px rgba(0, 0, 0, 0.08);
  outline: none;
}

.gallery-card__img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  display: block;
}

.gallery-card__author {
  padding: 0.75rem 1rem;
  font-weight: 600;
}

.gallery-placeholder {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--ink-muted);
  padding: 3rem 0;
}

.gallery-placeholder.error {
  color: var(--danger);
}

/* === Upload Form === */
.upload-form {
  max-width: 640px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2rem;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 12px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-label {
  display: block;
  margin-bottom: 0.4rem;
  font-weight: 600;
}

.form-input,
.form-textarea {
  width: 100%;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--paper-border);
  border-radius: 6px;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  background: var(--paper);
  color: var(--ink);
}

.form-input:focus,
.form-textarea:focus {
  outline: none;
  border-color: var(--sprout);
}

.image-picker-btn {
  width: 100%;
  padding: 0.6rem;
  border: 1px dashed var(--paper-border);
  border-radius: 6px;
  background: var(--paper);
  color: var(--ink-secondary);
  cursor: pointer;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.upload-status {
  min-height: 1.5rem;
  font-size: var(--text-sm);
}

.upload-status--info { color: var(--info); }
.upload-status--success { color: var(--success); }
.upload-status--error { color: var(--danger); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(30, 26, 22, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
  animation: fade-in 300ms ease-out;
}

.work-modal {
  position: relative;
  width: 100%;
  max-width: 900px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--paper-card);
  border-radius: 12px;
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 1rem;
  background: none;
  border: none;
  font-size: var(--text-2xl);
  color: var(--ink-muted);
  cursor: pointer;
}

.modal-title {
  margin-bottom: 1.25rem;
}

.modal-images {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.modal-figure img {
  width: 100%;
  border-radius: 8px;
  border: 1px solid var(--paper-border);
}

.modal-figure figcaption {
  text-align: center;
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.modal-text h3 {
  margin-top: 1rem;
  font-size: var(--text-lg);
}

.modal-text p {
  white-space: pre-wrap;
  color: var(--ink-secondary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  .slide, .gallery-card, .btn-primary { transition: none; }
  .modal-overlay { animation: none; }
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .mobile-menu-button { display: block; }

  .mobile-menu.open {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    position: sticky;
    top: 4rem;
    z-index: 899;
    padding: 1rem 2rem;
    background: var(--paper-card);
    border-bottom: 1px solid var(--paper-border);
  }

  .hero,
  .form-row,
  .modal-images {
    grid-template-columns: 1fr;
  }

  .mascot {
    right: 0.5rem;
    bottom: -1rem;
  }
}
"#;
