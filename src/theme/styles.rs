//! Global CSS styles for NxtWatch.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --accent: #4f46e5;
  --loader: #0b69ff;
  --search-bg-light: #f9f9f9;
  --search-bg-dark: #231f20;
  --muted-light: #475569;
  --muted-dark: #94a3b8;
  --font-sans: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
}

a {
  text-decoration: none;
  color: inherit;
}

/* === Shell === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-content {
  flex: 1;
}

.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
}

.nav-logo img {
  width: 120px;
}

/* === Buttons === */
.btn-primary {
  background: var(--accent);
  color: white;
  border: none;
  border-radius: 4px;
  padding: 0.5rem 1.5rem;
  font-weight: 600;
  cursor: pointer;
}

.btn-ghost {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  color: inherit;
}

.retry-btn {
  margin-top: 1rem;
}

/* === Search === */
.search-videos {
  padding: 1.5rem 2rem;
  min-height: 100%;
}

.search-bar {
  display: flex;
  max-width: 480px;
  border: 1px solid #cbd5e1;
  margin-bottom: 1.5rem;
}

.search-input {
  flex: 1;
  padding: 0.5rem 0.75rem;
  border: none;
  background: transparent;
  color: inherit;
  outline: none;
}

.search-btn {
  padding: 0 1rem;
  border-left: 1px solid #cbd5e1;
}

.search-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.layout-toggle {
  font-size: 0.875rem;
}

/* === Video grid === */
.video-grid {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.video-card {
  display: flex;
  flex-direction: column;
  transition: transform var(--transition-fast);
}

.video-card:hover {
  transform: translateY(-2px);
}

.video-grid.compact {
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: 1rem;
}

.video-card.compact .video-details {
  padding-top: 0.5rem;
}

.video-thumbnail {
  width: 100%;
}

.video-card-bottom {
  display: flex;
  gap: 0.75rem;
  padding-top: 0.5rem;
}

.channel-avatar {
  width: 36px;
  height: 36px;
}

.video-title {
  font-weight: 500;
}

.theme-light .video-channel, .theme-light .video-meta { color: var(--muted-light); }
.theme-dark .video-channel, .theme-dark .video-meta { color: var(--muted-dark); }

/* === Status panels (failure, empty results, not found) === */
.status-panel {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 3rem 1rem;
  min-height: 60vh;
}

.status-panel.theme-light { background: white; color: black; }
.status-panel.theme-dark { background: black; color: white; }

.status-image {
  width: 320px;
  max-width: 80%;
  margin-bottom: 1.5rem;
}

.status-heading {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.theme-light .status-description { color: var(--muted-light); }
.theme-dark .status-description { color: var(--muted-dark); }

/* === Loader === */
.loader-container {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 60vh;
}

.three-dots {
  display: flex;
  align-items: center;
  justify-content: space-around;
}

.three-dots .dot {
  border-radius: 50%;
  animation: dot-pulse 1s infinite ease-in-out both;
}

@keyframes dot-pulse {
  0%, 80%, 100% { transform: scale(0.4); opacity: 0.4; }
  40% { transform: scale(1); opacity: 1; }
}

/* === Video detail === */
.video-detail {
  padding: 2rem;
}

.back-link {
  display: inline-block;
  margin-top: 1rem;
  color: var(--accent);
}
"#;
