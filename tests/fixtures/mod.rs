//! Literal JSON documents shared by the integration tests.
#![allow(dead_code)]

pub const ERROR_ELLIPSE: &str = r#"{"MaximumVerticalProjection":1.984,"EquivalentHorizontalRadius":1.984,"MaximumHorizontalProjection":1.984,"E0":{"Azimuth":-121.44,"Error":40.3344,"Dip":32.44},"E1":{"Azimuth":22.64,"Error":12.5,"Dip":2.44},"E2":{"Azimuth":22.64,"Error":12.5,"Dip":2.44}}"#;

pub const HYPOCENTER: &str = r#"{"TimeError":1.984,"Time":"2015-12-28T21:32:24.017Z","LongitudeError":22.64,"LatitudeError":12.5,"DepthError":2.44,"Latitude":40.3344,"Longitude":-121.44,"Depth":32.44}"#;

pub const SITE: &str = r#"{"Station":"BMN","Network":"LB","Channel":"HHZ","Location":"01"}"#;

pub const SOURCE: &str = r#"{"AgencyID":"US","Author":"TestAuthor","Type":"LocalHuman"}"#;

pub const PICK: &str = r#"{"ID":"12GFH48776857","Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00","Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},"Source":{"Author":"TestAuthor","AgencyID":"US","Type":"Unknown"},"Time":"2015-12-28T21:32:24.017Z","Affinity":1.2,"Quality":0.45,"Use":true,"PickedPhase":"P","AssociatedPhase":"Pn","LocatedPhase":"Pg","Residual":1.05,"Distance":2.65,"Azimuth":21.5,"Weight":2.65,"Importance":3.8}"#;

pub const LOCATION_REQUEST: &str = r#"{"EarthModel":"AK135","SourceLatitude":40.3344,"SourceLongitude":-121.44,"IsDepthHeld":false,"Type":"RayLoc","SourceDepth":32.44,"IsLocationHeld":false,"BayesianSpread":20.3,"UseSVD":true,"BayesianDepth":66.7,"SourceOriginTime":"2015-12-28T21:32:24.017Z","InputData":[{"Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00","Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},"PickedPhase":"P","Use":true,"AssociatedPhase":"P","Time":"2015-12-28T21:32:24.017Z","Residual":1.05,"Source":{"Type":"Unknown","AgencyID":"US","Author":"TestAuthor"},"Weight":2.65,"Importance":3.8,"Azimuth":21.5,"Quality":0.45,"Affinity":1.2,"ID":"12GFH48776857","LocatedPhase":"P","Distance":2.65}],"IsLocationNew":false,"IsBayesianDepth":true,"ID":"12345678","Source":{"Author":"TestAuthor","AgencyID":"US","Type":"Unknown"}}"#;

pub const OUTPUT_DATA: &str = r#"{"MinimumDistance":2.14,"NumberOfUsedStations":33,"BayesianRange":20.3,"ErrorEllipse":{"MaximumVerticalProjection":1.984,"EquivalentHorizontalRadius":1.984,"MaximumHorizontalProjection":1.984,"E0":{"Azimuth":-121.44,"Error":40.3344,"Dip":32.44},"E1":{"Azimuth":22.64,"Error":12.5,"Dip":2.44},"E2":{"Azimuth":22.64,"Error":12.5,"Dip":2.44}},"SupportingData":[{"Site":{"Station":"BMN","Network":"LB","Channel":"HHZ","Location":"01"},"PickedPhase":"P","Use":true,"AssociatedPhase":"P","Time":"2015-12-28T21:32:24.017Z","Residual":1.05,"Source":{"Type":"Unknown","AgencyID":"US","Author":"TestAuthor"},"Weight":2.65,"Importance":3.8,"Azimuth":21.5,"Quality":0.45,"Affinity":1.2,"ID":"12GFH48776857","LocatedPhase":"P","Distance":2.65}],"Hypocenter":{"LatitudeError":12.5,"DepthError":2.44,"TimeError":1.984,"Latitude":40.3344,"Time":"2015-12-28T21:32:24.017Z","Longitude":-121.44,"Depth":32.44,"LongitudeError":22.64},"DepthImportance":1.8,"Quality":"A","Gap":33.67,"BayesianDepth":66.7,"SecondaryGap":33.67,"RMS":3.8,"NumberOfAssociatedStations":11,"NumberOfAssociatedPhases":22,"NumberOfUsedPhases":44}"#;

pub const LOCATION_RESULT: &str = r#"{"MinimumDistance":2.14,"NumberOfUsedStations":33,"BayesianRange":20.3,"ErrorEllipse":{"MaximumVerticalProjection":1.984,"EquivalentHorizontalRadius":1.984,"MaximumHorizontalProjection":1.984,"E0":{"Azimuth":-121.44,"Error":40.3344,"Dip":32.44},"E1":{"Azimuth":22.64,"Error":12.5,"Dip":2.44},"E2":{"Azimuth":22.64,"Error":12.5,"Dip":2.44}},"SupportingData":[{"Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00","Latitude":45.59697,"Longitude":-111.62967,"Elevation":1589.0},"PickedPhase":"P","Use":true,"AssociatedPhase":"P","Time":"2015-12-28T21:32:24.017Z","Residual":1.05,"Source":{"Type":"Unknown","AgencyID":"US","Author":"TestAuthor"},"Weight":2.65,"Importance":3.8,"Azimuth":21.5,"Quality":0.45,"Affinity":1.2,"ID":"12GFH48776857","LocatedPhase":"P","Distance":2.65}],"Hypocenter":{"LatitudeError":12.5,"DepthError":2.44,"TimeError":1.984,"Latitude":40.3344,"Time":"2015-12-28T21:32:24.017Z","Longitude":-121.44,"Depth":32.44,"LongitudeError":22.64},"DepthImportance":1.8,"LocatorExitCode":"Success","Quality":"A","Gap":33.67,"BayesianDepth":66.7,"SecondaryGap":33.67,"RMS":3.8,"NumberOfAssociatedStations":11,"NumberOfAssociatedPhases":22,"NumberOfUsedPhases":44,"ID":"12345678","Source":{"Author":"TestAuthor","AgencyID":"US","Type":"Unknown"}}"#;

pub const TRAVEL_TIME_DATA: &str = r#"{"Type":"TTData","LocationUseFlag":true,"DistanceDerivative":1.2,"DepthDerivative":3.45,"AssociationWeightFlag":true,"TeleseismicPhaseGroup":"P","Phase":"Pg","RayDerivative":5.67,"AuxiliaryPhaseGroup":"P","Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456}"#;

pub const PLOT_SAMPLE: &str = r#"{"Distance":1.2,"TravelTime":22.456,"Observability":0.34,"StatisticalSpread":1.5}"#;

pub const PLOT_BRANCH: &str = r#"{"Phase":"Pg","Samples":[{"Distance":1.2,"Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456},{"Distance":10.5,"Observability":1.63,"StatisticalSpread":2.1,"TravelTime":72.654}]}"#;

pub const PLOT_DATA: &str = r#"{"Type":"TTPlotData","Branches":[{"Phase":"Pg","Samples":[{"Distance":1.2,"Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456},{"Distance":10.5,"Observability":1.63,"StatisticalSpread":2.1,"TravelTime":72.654}]},{"Phase":"Sg","Samples":[{"Distance":3.2,"Observability":1.14,"StatisticalSpread":3.25,"TravelTime":132.456},{"Distance":100.5,"Observability":6.21,"StatisticalSpread":5.1,"TravelTime":542.654}]}],"MaximumTravelTime":12.5}"#;

pub const REQUEST_STANDARD: &str = r#"{"Data":[{"LocationUseFlag":true,"DistanceDerivative":1.2,"DepthDerivative":3.45,"AssociationWeightFlag":true,"Type":"TTData","TeleseismicPhaseGroup":1,"Phase":"Pg","RayDerivative":5.67,"AuxiliaryPhaseGroup":1,"Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456}],"Distance":12.45,"Type":"Standard","Elevation":5280.5,"Latitude":39.749444,"Longitude":-105.220305}"#;

pub const REQUEST_PLOT: &str = r#"{"Data":[{"Branches":[{"Phase":"Pg","Samples":[{"Distance":1.2,"Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456},{"Distance":10.5,"Observability":1.63,"StatisticalSpread":2.1,"TravelTime":72.654}]},{"Phase":"Sg","Samples":[{"Distance":3.2,"Observability":1.14,"StatisticalSpread":3.25,"TravelTime":132.456},{"Distance":100.5,"Observability":6.21,"StatisticalSpread":5.1,"TravelTime":542.654}]}],"Type":"TTPlotData","MaximumTravelTime":12.5}],"Distance":12.45,"Type":"Plot","Elevation":5280.5,"Latitude":39.749444,"Longitude":-105.220305}"#;

pub const REQUEST_PLOT_STATISTICS: &str = r#"{"Data":[{"Branches":[{"Phase":"Pg","Samples":[{"Distance":1.2,"Observability":0.34,"StatisticalSpread":1.5,"TravelTime":22.456},{"Distance":10.5,"Observability":1.63,"StatisticalSpread":2.1,"TravelTime":72.654}]},{"Phase":"Sg","Samples":[{"Distance":3.2,"Observability":1.14,"StatisticalSpread":3.25,"TravelTime":132.456},{"Distance":100.5,"Observability":6.21,"StatisticalSpread":5.1,"TravelTime":542.654}]}],"Type":"TTPlotData","MaximumTravelTime":12.5}],"Distance":12.45,"Type":"PlotStatistics","Elevation":5280.5,"Latitude":39.749444,"Longitude":-105.220305}"#;

pub const SESSION: &str = r#"{"ConvertTectonic":true,"ReturnBackBranches":true,"PhaseTypes":["P","S","PDiff"],"SourceLatitude":39.749444,"ReturnAllPhases":true,"EarthModel":"AK135","UseRSTT":false,"SourceLongitude":-105.220305,"IsPlot":false,"SourceDepth":15.2}"#;
