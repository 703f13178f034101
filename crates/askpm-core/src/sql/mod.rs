//! Query texts for the six retrieval operations, PostgreSQL dialect. The
//! statements are fixed; the only runtime input is the project code, always
//! bound as `$1`.

/// Up to ten active projects past their due date, most overdue first.
pub const LATE_PROJECTS: &str = "\
SELECT p.project_id,
       p.project_name,
       u.user_name AS owner,
       p.due_date,
       (CURRENT_DATE - p.due_date) AS days_late,
       COALESCE(SUM(r.gross_total), 0) AS total_revenue
FROM projects p
LEFT JOIN users u ON p.owner_id = u.user_id
LEFT JOIN revenues r ON p.project_id = r.project_id
WHERE p.due_date < CURRENT_DATE
  AND p.is_active
GROUP BY p.project_id, p.project_name, u.user_name, p.due_date
HAVING (CURRENT_DATE - p.due_date) > 0
ORDER BY days_late DESC
LIMIT 10";

/// At most one row of full detail for a single project.
pub const PROJECT_DETAILS: &str = "\
SELECT p.project_id,
       p.project_name,
       u.user_name AS owner,
       p.started_at,
       p.due_date,
       p.is_active,
       (CURRENT_DATE - p.due_date) AS days_late,
       COALESCE(SUM(r.gross_total), 0) AS total_revenue,
       COALESCE(SUM(rp.gross_amount), 0) AS invoiced_revenue
FROM projects p
LEFT JOIN users u ON p.owner_id = u.user_id
LEFT JOIN revenues r ON p.project_id = r.project_id
LEFT JOIN revenue_payments rp ON r.revenue_id = rp.revenue_id
  AND rp.invoice_status IN ('Paid', 'Scheduled')
WHERE p.project_id = $1
GROUP BY p.project_id, p.project_name, u.user_name, p.started_at, p.due_date, p.is_active";

/// Exactly one row: active project count plus total and average revenue.
pub const AGGREGATE_REVENUE: &str = "\
SELECT COUNT(DISTINCT p.project_id) AS active_projects,
       COALESCE(SUM(r.gross_total), 0) AS total_revenue,
       COALESCE(AVG(r.gross_total), 0) AS average_revenue
FROM projects p
LEFT JOIN revenues r ON p.project_id = r.project_id
WHERE p.is_active";

/// At most one row: revenue for a single project, split by invoice status.
pub const PROJECT_REVENUE: &str = "\
SELECT p.project_id,
       p.project_name,
       COALESCE(SUM(r.gross_total), 0) AS total_revenue,
       COALESCE(SUM(CASE WHEN rp.invoice_status = 'Paid' THEN rp.gross_amount ELSE 0 END), 0) AS paid_revenue,
       COALESCE(SUM(CASE WHEN rp.invoice_status = 'Scheduled' THEN rp.gross_amount ELSE 0 END), 0) AS scheduled_revenue
FROM projects p
LEFT JOIN revenues r ON p.project_id = r.project_id
LEFT JOIN revenue_payments rp ON r.revenue_id = rp.revenue_id
WHERE p.project_id = $1
GROUP BY p.project_id, p.project_name";

/// Allocated and worked hours per staff member, most allocated first.
pub const ALLOCATIONS: &str = "\
SELECT u.user_name AS staff_name,
       COALESCE(SUM(a.allocated_hours), 0) AS allocated_hours,
       COALESCE(SUM(a.worked_hours), 0) AS worked_hours
FROM resource_allocations a
JOIN users u ON a.user_id = u.user_id
WHERE a.project_id = $1
GROUP BY u.user_name
ORDER BY allocated_hours DESC";

/// Invoice lines for a project, most recent first.
pub const INVOICES: &str = "\
SELECT rp.description,
       rp.gross_amount AS amount,
       rp.invoiced_at,
       rp.invoice_status AS status
FROM revenue_payments rp
JOIN revenues r ON rp.revenue_id = r.revenue_id
WHERE r.project_id = $1
ORDER BY rp.invoiced_at DESC";
