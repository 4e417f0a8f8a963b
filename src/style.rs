//! Site-wide stylesheet, mounted once through `stylist`'s [`Global`]
//! component so every section shares the same class vocabulary.
//!
//! [`Global`]: stylist::yew::Global

use stylist::{css, StyleSource};

pub fn global() -> StyleSource {
    css!(
        r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        html {
            scroll-behavior: smooth;
        }

        body {
            font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
            color: #1F2937;
            background: #FFFFFF;
            line-height: 1.6;
        }

        /* Layout */

        .container {
            position: relative;
            max-width: 1100px;
            margin: 0 auto;
            padding: 0 24px;
        }

        .container.narrow {
            max-width: 820px;
        }

        .container.split {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 48px;
            align-items: center;
        }

        .section {
            padding: 96px 0;
            position: relative;
        }

        .background-effects {
            position: absolute;
            inset: 0;
            overflow: hidden;
            pointer-events: none;
        }

        .bg-shape {
            position: absolute;
        }

        .bg-shape-inner {
            width: 100%;
            height: 100%;
        }

        .bg-circle,
        .bg-diamond,
        .bg-square {
            width: 100%;
            height: 100%;
            border: 2px solid;
        }

        .bg-circle {
            border-radius: 50%;
        }

        .bg-diamond {
            transform: rotate(45deg);
        }

        .bg-square {
            border-radius: 4px;
        }

        .section-soft {
            background: linear-gradient(180deg, #F9FAFB, #FFFFFF);
        }

        .section-tinted {
            background: linear-gradient(180deg, #EFF6FF, #F9FAFB);
        }

        .center {
            text-align: center;
        }

        .text-left {
            text-align: left;
        }

        .intro-gap {
            margin-bottom: 56px;
        }

        .block {
            margin: 24px 0;
        }

        .grid {
            display: grid;
            gap: 28px;
            margin-bottom: 56px;
        }

        .grid-2 { grid-template-columns: repeat(2, 1fr); }
        .grid-3 { grid-template-columns: repeat(3, 1fr); }
        .grid-4 { grid-template-columns: repeat(4, 1fr); }
        .grid-6 { grid-template-columns: repeat(6, 1fr); }

        /* Type */

        .section-title {
            font-size: 2.25rem;
            font-weight: 800;
            color: #2F4A60;
            text-align: center;
            margin-bottom: 32px;
            line-height: 1.25;
        }

        .section-title.text-left {
            text-align: left;
        }

        .section-title.on-dark {
            color: #FFFFFF;
        }

        .lead {
            font-size: 1.125rem;
            color: #4B5563;
            max-width: 800px;
            margin-left: auto;
            margin-right: auto;
        }

        .subheading {
            font-size: 1.05rem;
            font-weight: 700;
            margin-bottom: 12px;
        }

        .accent-blue { color: #6699FF; }
        .accent-green { color: #22C55E; }
        .accent-amber { color: #F59E0B; }
        .accent-red { color: #EF4444; }

        .gradient-blue { background: linear-gradient(135deg, #6699FF, #5588EE); }
        .gradient-green { background: linear-gradient(135deg, #22C55E, #16A34A); }
        .gradient-amber { background: linear-gradient(135deg, #FACC15, #F59E0B); }

        /* Cards */

        .card {
            background: #FFFFFF;
            border: 1px solid #F3F4F6;
            border-radius: 16px;
            padding: 28px;
            box-shadow: 0 10px 25px rgba(47, 74, 96, 0.07);
            transition: box-shadow 0.3s ease, transform 0.3s ease;
        }

        .card:hover {
            box-shadow: 0 18px 40px rgba(47, 74, 96, 0.12);
        }

        .card-title {
            font-size: 1.15rem;
            font-weight: 700;
            color: #111827;
            margin-bottom: 10px;
        }

        .card-subtitle {
            font-size: 0.9rem;
            font-weight: 600;
            margin-bottom: 10px;
        }

        .card-text {
            font-size: 0.9rem;
            color: #4B5563;
            margin-bottom: 14px;
        }

        .card-stat {
            font-size: 0.8rem;
            font-weight: 600;
            color: #6699FF;
            background: rgba(102, 153, 255, 0.08);
            border-radius: 9999px;
            padding: 6px 14px;
            display: inline-block;
        }

        .advantage-icon {
            width: 56px;
            height: 56px;
            border-radius: 14px;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.6rem;
            margin-bottom: 16px;
            box-shadow: 0 6px 14px rgba(0, 0, 0, 0.12);
        }

        .card.center .advantage-icon {
            margin-left: auto;
            margin-right: auto;
        }

        /* Lists */

        .dot-list,
        .check-list {
            list-style: none;
            text-align: left;
        }

        .dot-list li,
        .check-list li {
            font-size: 0.875rem;
            color: #374151;
            padding-left: 22px;
            position: relative;
            margin-bottom: 8px;
        }

        .dot-list li::before {
            content: '•';
            color: #6699FF;
            position: absolute;
            left: 4px;
        }

        .check-list li::before {
            content: '✓';
            color: #22C55E;
            position: absolute;
            left: 0;
        }

        .dot-list.amber li::before { color: #F59E0B; }
        .dot-list.red li::before { color: #EF4444; }

        /* Panels and stats */

        .summary-panel {
            background: linear-gradient(120deg, rgba(102, 153, 255, 0.08), rgba(34, 197, 94, 0.08));
            border: 1px solid rgba(102, 153, 255, 0.2);
            border-radius: 20px;
            padding: 40px;
            margin-bottom: 56px;
        }

        .panel-title {
            font-size: 1.5rem;
            font-weight: 700;
            color: #2F4A60;
            margin-bottom: 28px;
        }

        .panel-title.center {
            text-align: center;
        }

        .panel-text {
            font-size: 0.95rem;
            color: #4B5563;
        }

        .stat-block {
            background: rgba(255, 255, 255, 0.6);
            border-radius: 12px;
            padding: 18px;
        }

        .stat-value {
            font-size: 1.9rem;
            font-weight: 800;
            margin-bottom: 6px;
        }

        .stat-label {
            font-size: 0.95rem;
            font-weight: 700;
            color: #111827;
        }

        .stat-note {
            font-size: 0.8rem;
            color: #6B7280;
        }

        .stat-emoji {
            font-size: 2rem;
            margin-bottom: 10px;
        }

        .pill {
            background: #F3F4F6;
            color: #374151;
            border-radius: 9999px;
            padding: 5px 14px;
            font-size: 0.8rem;
            white-space: nowrap;
        }

        .pill-filled {
            color: #FFFFFF;
        }

        .pill-note {
            display: inline-flex;
            align-items: center;
            gap: 8px;
            background: rgba(102, 153, 255, 0.1);
            color: #2F4A60;
            border-radius: 9999px;
            padding: 10px 22px;
            font-size: 0.9rem;
            font-weight: 600;
        }

        /* Buttons */

        .btn {
            display: inline-block;
            border: none;
            border-radius: 9999px;
            padding: 14px 32px;
            font-size: 0.95rem;
            font-weight: 700;
            cursor: pointer;
            transition: transform 0.2s ease, box-shadow 0.2s ease;
        }

        .btn:hover {
            transform: translateY(-2px);
        }

        .btn-primary {
            background: linear-gradient(135deg, #6699FF, #5588EE);
            color: #FFFFFF;
            box-shadow: 0 10px 22px rgba(102, 153, 255, 0.35);
        }

        .btn-gradient {
            color: #FFFFFF;
            width: 100%;
        }

        .btn-white {
            background: #FFFFFF;
            color: #2F4A60;
        }

        .btn-outline {
            background: transparent;
            color: #FFFFFF;
            border: 2px solid rgba(255, 255, 255, 0.7);
        }

        /* Header */

        .site-header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(6px);
            border-bottom: 1px solid #F3F4F6;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
        }

        .header-inner {
            display: flex;
            align-items: center;
            justify-content: center;
            height: 80px;
        }

        .logo-text {
            font-size: 1.6rem;
            font-weight: 900;
            letter-spacing: 0.18em;
            color: #6699FF;
        }

        /* Hero */

        .hero {
            position: relative;
            padding: 200px 0 120px;
            background:
                radial-gradient(circle at 15% 20%, rgba(102, 153, 255, 0.12), transparent 45%),
                radial-gradient(circle at 85% 75%, rgba(34, 197, 94, 0.1), transparent 45%),
                #FFFFFF;
        }

        .hero-inner {
            text-align: center;
        }

        .hero-title {
            font-size: 3rem;
            font-weight: 900;
            color: #2F4A60;
            line-height: 1.2;
            margin-bottom: 28px;
        }

        .hero-accent {
            display: block;
            background: linear-gradient(90deg, #6699FF, #22C55E);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }

        .hero-subtitle {
            font-size: 1.25rem;
            color: #4B5563;
            max-width: 760px;
            margin: 0 auto;
        }

        /* Bridge illustration */

        .bridge {
            position: relative;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 8px;
            margin: 48px auto 0;
        }

        .bridge-node {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 8px;
        }

        .bridge-circle {
            width: 80px;
            height: 80px;
            border-radius: 50%;
            color: #FFFFFF;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 10px 22px rgba(47, 74, 96, 0.2);
        }

        .bridge-label {
            font-size: 0.85rem;
            font-weight: 700;
            color: #2F4A60;
        }

        /* Personas */

        .persona-card {
            display: flex;
            flex-direction: column;
        }

        .persona-head {
            display: flex;
            align-items: center;
            gap: 14px;
            margin-bottom: 16px;
        }

        .persona-avatar {
            width: 64px;
            height: 64px;
            border-radius: 50%;
            overflow: hidden;
            flex-shrink: 0;
        }

        .persona-name {
            font-size: 1.1rem;
            font-weight: 700;
            color: #111827;
        }

        .persona-kind {
            font-size: 0.8rem;
            font-weight: 600;
            color: #6699FF;
        }

        .persona-age,
        .persona-location,
        .persona-occupation {
            font-size: 0.8rem;
            color: #6B7280;
        }

        .persona-description {
            font-size: 0.9rem;
            color: #4B5563;
            margin-bottom: 14px;
        }

        .persona-list-title {
            font-size: 0.85rem;
            font-weight: 700;
            color: #111827;
            margin: 10px 0 6px;
        }

        .persona-quote {
            margin-top: auto;
            font-size: 0.875rem;
            font-style: italic;
            color: #2F4A60;
            background: rgba(102, 153, 255, 0.07);
            border-left: 3px solid #6699FF;
            border-radius: 0 10px 10px 0;
            padding: 12px 16px;
        }

        .persona-emoji {
            font-size: 1.8rem;
            margin-bottom: 8px;
        }

        /* Competitors */

        .fact-rows {
            margin-bottom: 12px;
        }

        .fact-row {
            display: flex;
            justify-content: space-between;
            font-size: 0.85rem;
            color: #4B5563;
            padding: 6px 0;
            border-bottom: 1px solid #F3F4F6;
        }

        .differentiator {
            font-size: 0.8rem;
            font-weight: 600;
            color: #FFFFFF;
            border-radius: 9999px;
            padding: 8px 14px;
            text-align: center;
        }

        /* Ecosystem */

        .ecosystem-card {
            background: #FFFFFF;
            border: 1px solid #F3F4F6;
            border-radius: 16px;
            padding: 28px;
            box-shadow: 0 10px 25px rgba(47, 74, 96, 0.07);
            text-align: center;
            height: 100%;
        }

        .ecosystem-card-icon {
            width: 64px;
            height: 64px;
            border-radius: 16px;
            display: flex;
            align-items: center;
            justify-content: center;
            margin: 0 auto 18px;
            color: #FFFFFF;
        }

        .ecosystem-card-title {
            font-size: 1.05rem;
            font-weight: 700;
            color: #111827;
            margin-bottom: 8px;
        }

        .ecosystem-card-text {
            font-size: 0.875rem;
            color: #4B5563;
        }

        .step-slot {
            position: relative;
        }

        .step-number {
            position: absolute;
            top: -14px;
            left: -14px;
            width: 32px;
            height: 32px;
            border-radius: 50%;
            background: #2F4A60;
            color: #FFFFFF;
            font-size: 0.85rem;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 1;
        }

        /* Job draft */

        .profile-demo {
            position: relative;
            max-width: 460px;
            margin: 0 auto;
        }

        .profile-card {
            text-align: left;
        }

        .profile-head {
            display: flex;
            align-items: center;
            gap: 16px;
            margin-bottom: 18px;
        }

        .profile-avatar {
            width: 56px;
            height: 56px;
            border-radius: 50%;
            background: linear-gradient(135deg, #6699FF, #5588EE);
            color: #FFFFFF;
            font-weight: 800;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .profile-ident h3 {
            font-size: 1.05rem;
            color: #111827;
        }

        .profile-ident p {
            font-size: 0.8rem;
            color: #6B7280;
        }

        .draft-popup {
            position: absolute;
            right: -24px;
            bottom: -32px;
            max-width: 280px;
            background: #FFFFFF;
            border: 2px solid #22C55E;
            border-radius: 14px;
            padding: 18px;
            box-shadow: 0 18px 40px rgba(34, 197, 94, 0.25);
            text-align: left;
            opacity: 0;
            transform: scale(0);
        }

        .draft-popup-head {
            font-weight: 800;
            color: #22C55E;
            margin-bottom: 6px;
        }

        .draft-popup p {
            font-size: 0.8rem;
            color: #374151;
        }

        /* Gamification */

        .badge-row {
            display: flex;
            justify-content: center;
            gap: 24px;
            flex-wrap: wrap;
            margin-bottom: 48px;
        }

        .badge-wrap {
            position: relative;
            text-align: center;
            width: 110px;
        }

        .badge-medallion {
            width: 84px;
            height: 84px;
            border-radius: 50%;
            margin: 0 auto 10px;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 8px 18px rgba(0, 0, 0, 0.18);
        }

        .badge-icon {
            font-size: 2rem;
        }

        .badge-special {
            box-shadow: 0 0 0 3px #FACC15, 0 8px 18px rgba(250, 204, 21, 0.4);
        }

        .badge-women {
            box-shadow: 0 0 0 3px #EC4899, 0 8px 18px rgba(236, 72, 153, 0.4);
        }

        .badge-tooltip {
            position: absolute;
            bottom: calc(100% + 10px);
            left: 50%;
            transform: translateX(-50%);
            background: #1F2937;
            color: #F9FAFB;
            border-radius: 10px;
            padding: 10px 14px;
            width: 180px;
            font-size: 0.75rem;
            z-index: 10;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
        }

        .badge-tooltip-name {
            font-weight: 700;
            margin-bottom: 2px;
        }

        .badge-tooltip-level {
            color: #9CA3AF;
        }

        .badge-tooltip-note {
            color: #FACC15;
        }

        .badge-tooltip-rarity {
            font-weight: 700;
        }

        .rarity-mythic { color: #F472B6; }
        .rarity-legendary { color: #FACC15; }
        .rarity-rare { color: #93C5FD; }
        .rarity-common { color: #D1D5DB; }
        .rarity-default { color: #E5E7EB; }

        /* Progress chart */

        .progress-chart {
            text-align: left;
        }

        .chart-item {
            margin-bottom: 20px;
        }

        .chart-head {
            display: flex;
            justify-content: space-between;
            margin-bottom: 6px;
        }

        .chart-label {
            font-size: 0.875rem;
            color: #374151;
        }

        .chart-value {
            font-size: 0.875rem;
            font-weight: 700;
        }

        .chart-track {
            height: 10px;
            background: #F3F4F6;
            border-radius: 9999px;
            overflow: hidden;
        }

        .chart-bar {
            height: 100%;
            border-radius: 9999px;
        }

        .chart-footnote {
            margin-top: 24px;
            font-size: 0.875rem;
        }

        .pulse-dot {
            display: inline-block;
            width: 10px;
            height: 10px;
            border-radius: 50%;
            background: #22C55E;
            margin-right: 8px;
            box-shadow: 0 0 0 4px rgba(34, 197, 94, 0.2);
        }

        /* Team */

        .team-slot {
            display: flex;
        }

        .team-slot .team-member {
            flex: 1;
        }

        .team-avatar {
            width: 96px;
            height: 96px;
            margin: 0 auto 16px;
        }

        .avatar-photo {
            width: 100%;
            height: 100%;
            border-radius: 50%;
            object-fit: cover;
        }

        .avatar-fallback {
            width: 100%;
            height: 100%;
            border-radius: 50%;
            color: #FFFFFF;
            font-size: 1.5rem;
            font-weight: 800;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .team-photo {
            max-width: 640px;
            margin: 0 auto;
            border-radius: 20px;
            overflow: hidden;
            box-shadow: 0 18px 40px rgba(47, 74, 96, 0.18);
        }

        .team-photo img {
            width: 100%;
            display: block;
        }

        .team-photo-caption {
            background: #2F4A60;
            color: #E5E7EB;
            padding: 16px 20px;
            font-size: 0.85rem;
            text-align: left;
        }

        .team-photo-title {
            font-weight: 700;
            color: #FFFFFF;
        }

        /* Cost tables */

        .cost-table {
            background: #FFFFFF;
            border: 1px solid #F3F4F6;
            border-radius: 16px;
            overflow: hidden;
            box-shadow: 0 10px 25px rgba(47, 74, 96, 0.07);
            margin-bottom: 32px;
        }

        .cost-table table {
            width: 100%;
            border-collapse: collapse;
        }

        .cost-table th,
        .cost-table td {
            padding: 14px 16px;
            font-size: 0.85rem;
            text-align: left;
            border-top: 1px solid #F3F4F6;
        }

        .cost-table thead th {
            background: #F9FAFB;
            font-weight: 600;
            color: #374151;
            border-top: none;
        }

        .cost-table .num {
            text-align: right;
        }

        .cost-table-head {
            color: #FFFFFF;
            font-weight: 700;
            padding: 16px 20px;
        }

        .head-blue { background: #6699FF; }
        .head-green { background: #22C55E; }

        .cost-table thead.head-slate th {
            background: #2F4A60;
            color: #FFFFFF;
        }

        .cell-category {
            font-weight: 600;
            color: #111827;
        }

        .cell-details {
            color: #6B7280;
        }

        .foot-blue td {
            background: rgba(102, 153, 255, 0.1);
            font-weight: 700;
        }

        .foot-green td {
            background: rgba(34, 197, 94, 0.1);
            font-weight: 700;
        }

        .tone-pill {
            display: inline-block;
            border-radius: 9999px;
            padding: 3px 10px;
            font-size: 0.72rem;
            font-weight: 600;
        }

        .tone-amber { background: #FEF3C7; color: #92400E; }
        .tone-red { background: #FEE2E2; color: #991B1B; }
        .tone-green { background: #DCFCE7; color: #166534; }

        /* Continuity phases */

        .phase-timeline {
            display: flex;
            flex-direction: column;
            gap: 28px;
            margin-bottom: 56px;
        }

        .phase-row {
            display: flex;
            gap: 22px;
            align-items: flex-start;
        }

        .phase-body {
            flex: 1;
        }

        .phase-head {
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 16px;
            flex-wrap: wrap;
            margin-bottom: 10px;
        }

        .phase-tags {
            display: flex;
            gap: 10px;
        }

        .phase-milestones {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 4px 16px;
        }

        /* Tech stack */

        .tech-stack .grid {
            margin-bottom: 0;
        }

        .tech-item {
            padding: 18px 10px;
        }

        /* CTA banner (mid-page) */

        .cta-banner {
            background: linear-gradient(120deg, #6699FF, #22C55E);
            color: #FFFFFF;
            border-radius: 20px;
            padding: 48px;
            text-align: center;
        }

        .cta-banner h3 {
            font-size: 1.5rem;
            margin-bottom: 12px;
        }

        .cta-banner p {
            opacity: 0.9;
            margin-bottom: 24px;
        }

        .cta-buttons {
            display: flex;
            gap: 16px;
            justify-content: center;
        }

        /* Unified CTA + footer */

        .cta-footer {
            position: relative;
            background: linear-gradient(135deg, #6699FF 0%, #5588EE 50%, #2F4A60 100%);
            color: #FFFFFF;
            overflow: hidden;
        }

        .cta-block {
            padding: 120px 0 80px;
        }

        .cta-lead {
            font-size: 1.35rem;
            font-weight: 300;
            opacity: 0.9;
            max-width: 820px;
            margin: 0 auto 56px;
        }

        .cta-cards {
            max-width: 820px;
            margin: 0 auto 56px;
        }

        .cta-card {
            background: rgba(255, 255, 255, 0.1);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 20px;
            padding: 36px;
            backdrop-filter: blur(4px);
            text-align: left;
        }

        .cta-card h3 {
            font-size: 1.2rem;
            margin-bottom: 10px;
        }

        .cta-card p {
            font-size: 0.92rem;
            color: rgba(255, 255, 255, 0.8);
        }

        .cta-card-icon {
            font-size: 2.2rem;
            margin-bottom: 14px;
        }

        .cta-divider {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 16px;
            font-size: 1.5rem;
        }

        .divider-line {
            width: 64px;
            height: 1px;
            background: rgba(255, 255, 255, 0.3);
        }

        .footer-block {
            padding: 64px 0 48px;
            background: rgba(47, 74, 96, 0.3);
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(4px);
        }

        .footer-columns {
            margin-bottom: 48px;
            text-align: left;
        }

        .footer-block .logo-text {
            color: #FFFFFF;
        }

        .footer-heading {
            font-size: 1.05rem;
            font-weight: 600;
            margin-bottom: 18px;
        }

        .footer-links {
            list-style: none;
        }

        .footer-links li {
            margin-bottom: 10px;
        }

        .footer-links a {
            color: #D1D5DB;
            font-size: 0.875rem;
            text-decoration: none;
            transition: color 0.2s ease;
        }

        .footer-links a:hover {
            color: #FFFFFF;
        }

        .footer-note {
            font-size: 0.85rem;
            color: rgba(255, 255, 255, 0.7);
            margin: 12px 0;
        }

        .footer-fineprint {
            font-size: 0.72rem;
            color: rgba(255, 255, 255, 0.45);
        }

        .footer-motto {
            display: flex;
            align-items: center;
            gap: 8px;
            font-size: 0.85rem;
            color: rgba(255, 255, 255, 0.6);
        }

        .footer-bottom {
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 24px;
            flex-wrap: wrap;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            padding-top: 32px;
        }

        .footer-proof {
            text-align: right;
            font-size: 0.85rem;
            color: rgba(255, 255, 255, 0.7);
        }

        .footer-proof span {
            margin-left: 16px;
        }

        .footer-signoff {
            margin-top: 32px;
            text-align: center;
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.6);
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 12px;
        }

        .footer-signoff .floating-element {
            font-size: 1.2rem;
        }

        /* Responsive */

        @media (max-width: 900px) {
            .grid-3,
            .grid-4 {
                grid-template-columns: repeat(2, 1fr);
            }

            .grid-6 {
                grid-template-columns: repeat(3, 1fr);
            }

            .container.split {
                grid-template-columns: 1fr;
            }

            .phase-milestones {
                grid-template-columns: 1fr;
            }

            .hero-title {
                font-size: 2.2rem;
            }
        }

        @media (max-width: 600px) {
            .grid-2,
            .grid-3,
            .grid-4 {
                grid-template-columns: 1fr;
            }

            .grid-6 {
                grid-template-columns: repeat(2, 1fr);
            }

            .section {
                padding: 64px 0;
            }

            .section-title {
                font-size: 1.7rem;
            }

            .draft-popup {
                right: 0;
            }

            .footer-bottom,
            .footer-proof {
                text-align: center;
                justify-content: center;
            }

            .cta-buttons {
                flex-direction: column;
                align-items: center;
            }
        }
    "#
    )
}
