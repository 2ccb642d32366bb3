//! Global CSS styles for the Artwork Gallery.
//!
//! Light gallery aesthetic: white cards on a soft grey wall, rounded
//! corners, and hover lift.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --wall: #f3f4f6;
  --card-bg: #ffffff;
  --media-bg: #f3f4f6;
  --unavailable-bg: #e5e7eb;

  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  --sold-bg: #fee2e2;
  --sold-text: #991b1b;
  --available-bg: #dcfce7;
  --available-text: #166534;

  --radius: 12px;
  --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  --shadow-hover: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  --transition: 300ms ease;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--wall);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* === Gallery page === */
.gallery-page { padding: 2rem; max-width: 1400px; margin: 0 auto; }
.gallery-header { display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 1.5rem; }
.gallery-title { margin: 0; font-size: 1.875rem; font-weight: 700; }
.gallery-count, .gallery-empty { color: var(--text-secondary); }

.gallery-grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(4, minmax(0, 1fr));
}

@media (max-width: 1200px) {
  .gallery-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 767px) {
  .gallery-page { padding: 1rem; }
  .gallery-grid { grid-template-columns: 1fr; }
}

/* === Artwork card === */
.artwork-card {
  position: relative;
  background: var(--card-bg);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow);
  cursor: pointer;
  transition: box-shadow var(--transition), transform var(--transition);
}

.artwork-card:hover {
  box-shadow: var(--shadow-hover);
  transform: translateY(-4px);
}

.artwork-card__media {
  position: relative;
  aspect-ratio: 4 / 3;
  background: var(--media-bg);
}

.card-image--fill {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: opacity var(--transition);
}

.opacity-0 { opacity: 0; }
.opacity-100 { opacity: 1; }

/* Loading */
.loading-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.loading-spinner {
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  border-bottom: 2px solid var(--text-primary);
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Failed image */
.artwork-card__unavailable {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--unavailable-bg);
}

.artwork-card__unavailable-body { text-align: center; color: var(--text-secondary); }
.artwork-card__unavailable-icon { display: block; width: 3rem; height: 3rem; margin: 0 auto 0.5rem; }
.artwork-card__unavailable-text { margin: 0; font-size: 0.875rem; }
.artwork-card__unavailable-hint { margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--text-muted); }

/* Hover overlay */
.artwork-card__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  backdrop-filter: blur(4px);
  transition: opacity var(--transition);
}

.artwork-card:hover .artwork-card__overlay { opacity: 1; }

@media (max-width: 767px) {
  .artwork-card__overlay .view-details { display: none; }
  .artwork-card__overlay { pointer-events: none; }
}

/* Badge */
.artwork-card__badge-slot { position: absolute; top: 0.75rem; right: 0.75rem; }

.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 500;
}

.badge--sold { background: var(--sold-bg); color: var(--sold-text); }
.badge--available { background: var(--available-bg); color: var(--available-text); }

/* Info */
.artwork-card__info { padding: 1rem; }

.artwork-card__title {
  margin: 0 0 0.5rem;
  font-size: 1.125rem;
  font-weight: 600;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
  transition: color var(--transition);
}

.artwork-card:hover .artwork-card__title { color: #374151; }

.artwork-card__meta { display: flex; align-items: center; font-size: 0.875rem; color: var(--text-secondary); }
.artwork-card__meta-icon { width: 1rem; height: 1rem; margin-right: 0.25rem; }
.artwork-card__meta-sep { margin: 0 0.25rem; }

/* === Buttons === */
.btn-primary {
  background: #ffffff;
  color: var(--text-primary);
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 8px;
  box-shadow: var(--shadow);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
}

.btn-primary:focus { outline: none; box-shadow: 0 0 0 2px #6b7280; }

.btn-ghost {
  background: none;
  border: none;
  color: var(--text-secondary);
  text-decoration: none;
  cursor: pointer;
}

.btn-ghost:hover { color: var(--text-primary); }

.icon-btn {
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  color: #ffffff;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.85);
}

.artwork-modal { max-width: 90vw; max-height: 90vh; display: flex; flex-direction: column; }
.artwork-modal__header { display: flex; align-items: center; justify-content: space-between; gap: 1rem; color: #ffffff; }
.artwork-modal__title { margin: 0 0 0.75rem; font-size: 1.25rem; }
.artwork-modal__body { display: flex; justify-content: center; }
.artwork-modal__image { max-width: 90vw; max-height: 80vh; object-fit: contain; }

/* === Detail page === */
.detail-page { padding: 2rem; max-width: 1100px; margin: 0 auto; }
.artwork-detail { display: grid; grid-template-columns: 3fr 2fr; gap: 2rem; margin-top: 1rem; }
.artwork-detail__media { position: relative; }
.artwork-detail__image { width: 100%; border-radius: var(--radius); box-shadow: var(--shadow); }
.artwork-detail__title { margin-top: 0; }
.artwork-detail__facts { display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; color: var(--text-secondary); }
.artwork-detail__facts dt { font-weight: 600; }
.artwork-detail__facts dd { margin: 0; }
.artwork-detail__source { color: var(--text-secondary); font-size: 0.875rem; }

@media (max-width: 767px) {
  .artwork-detail { grid-template-columns: 1fr; }
}
"#;
