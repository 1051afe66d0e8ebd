use std::fmt;

/// Predicado sobre el snapshot de sesión. Debe ser puro respecto a la
/// sesión recibida: el motor puede evaluarlo varias veces por navegación.
pub type StepPredicate<S> = Box<dyn Fn(&S) -> bool>;

/// Descriptor de un paso dentro de un flujo multipágina.
///
/// El motor sólo necesita `path` para navegar; el resto son metadatos que
/// gobiernan cómo se recorre la lista:
/// - `is_complete` se consulta únicamente al navegar hacia atrás y al
///   calcular el paso de reanudación (`latest_step`).
/// - `should_be_skipped` excluye el paso del recorrido en ambas direcciones.
/// - `never_go_back_to` impide que la navegación hacia atrás aterrice aquí;
///   visto desde adelante el paso actúa como perpetuamente saltable.
/// - `component` es la vinculación de render: opaca para el motor.
pub struct ProgressStep<S> {
    pub path: String,
    pub exact: bool,
    pub is_complete: Option<StepPredicate<S>>,
    pub should_be_skipped: Option<StepPredicate<S>>,
    pub never_go_back_to: bool,
    pub component: Option<String>,
}

impl<S> ProgressStep<S> {
    /// Crea un descriptor con comparación por prefijo y sin predicados.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(),
               exact: false,
               is_complete: None,
               should_be_skipped: None,
               never_go_back_to: false,
               component: None }
    }

    /// Exige igualdad exacta de ruta en lugar de coincidencia por prefijo.
    #[inline]
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Declara el criterio de completitud del paso.
    pub fn complete_when(mut self, predicate: impl Fn(&S) -> bool + 'static) -> Self {
        self.is_complete = Some(Box::new(predicate));
        self
    }

    /// Declara el criterio de salto del paso.
    pub fn skip_when(mut self, predicate: impl Fn(&S) -> bool + 'static) -> Self {
        self.should_be_skipped = Some(Box::new(predicate));
        self
    }

    /// Marca el paso como destino prohibido para la navegación hacia atrás.
    #[inline]
    pub fn never_go_back(mut self) -> Self {
        self.never_go_back_to = true;
        self
    }

    /// Asocia el nombre del componente que renderiza este paso.
    pub fn renders(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Compara `pathname` contra la ruta del paso.
    ///
    /// En modo exacto es igualdad de cadenas. En modo prefijo, la ruta debe
    /// coincidir completa y el resto del pathname debe empezar en un límite
    /// de segmento (`/`): `/foo/2` acepta `/foo/2/funky-modal` pero nunca
    /// `/foo/20`.
    pub fn matches_pathname(&self, pathname: &str) -> bool {
        if self.exact {
            return self.path == pathname;
        }
        match pathname.strip_prefix(self.path.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }

    /// Evalúa el predicado de salto; sin predicado el paso nunca se salta.
    #[inline]
    pub fn is_skipped(&self, session: &S) -> bool {
        self.should_be_skipped.as_ref().map_or(false, |p| p(session))
    }

    /// Evalúa el predicado de completitud.
    ///
    /// La ausencia de predicado cuenta como completo: si contara como
    /// incompleto, la navegación hacia atrás saltaría perpetuamente todos
    /// los pasos sin criterio declarado.
    #[inline]
    pub fn is_marked_complete(&self, session: &S) -> bool {
        self.is_complete.as_ref().map_or(true, |p| p(session))
    }
}

// Los predicados son closures sin Debug; mostramos su presencia.
impl<S> fmt::Debug for ProgressStep<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressStep")
         .field("path", &self.path)
         .field("exact", &self.exact)
         .field("is_complete", &self.is_complete.is_some())
         .field("should_be_skipped", &self.should_be_skipped.is_some())
         .field("never_go_back_to", &self.never_go_back_to)
         .field("component", &self.component)
         .finish()
    }
}
